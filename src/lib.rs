pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod composer;
pub mod handler;
pub mod server;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/*

docgen: a small HTTP service that turns a topic, a code snippet or
an error description into technical documentation by composing a
template-driven prompt and forwarding it to a hosted LLM gateway.

docgen/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Templates, audience/detail/format enums
│   ├── error.rs        # Error taxonomy and HTTP status hints
│   ├── config.rs       # Gateway and server configuration
│   ├── composer.rs     # Prompt composition
│   ├── handler.rs      # Generation + chat assistant handlers
│   ├── server.rs       # axum routes, CORS, JSON mapping
│   ├── request.rs      # Wire request/response types
│   ├── providers/
│   │   ├── mod.rs
│   │   └── gateway.rs  # Chat-completion gateway client
│   └── main.rs
└── tests/

*/

pub use composer::compose;
pub use handler::DocGenHandler;

/// DOCGEN STRUCTURES:

/// Documentation templates the composer knows how to build.
/// Adding one here forces every match in `composer` to cover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template
{   /// Guide for an API or feature
    ApiGuide
  , /// Inline comments for a pasted snippet
    CodeComments
  , /// Installation and configuration walkthrough
    SetupInstructions
  , /// Guide for diagnosing a described problem
    Troubleshooting
  , /// Introduction chapter of a user manual
    UserManual
}

impl Template
{   /// All templates, in catalog order
    pub const ALL: [Template; 5] = [
      Template::ApiGuide
    , Template::CodeComments
    , Template::SetupInstructions
    , Template::Troubleshooting
    , Template::UserManual
    ];

    /// Wire identifier, e.g. "setup-instructions"
    pub fn id(&self) -> &'static str
    {   match self
        {   Template::ApiGuide => "api-guide"
          , Template::CodeComments => "code-comments"
          , Template::SetupInstructions => "setup-instructions"
          , Template::Troubleshooting => "troubleshooting"
          , Template::UserManual => "user-manual"
        }
    }

    /// Human-readable name shown to users
    pub fn display_name(&self) -> &'static str
    {   match self
        {   Template::ApiGuide => "API Guide"
          , Template::CodeComments => "Code Comments"
          , Template::SetupInstructions => "Setup Instructions"
          , Template::Troubleshooting => "Troubleshooting Guide"
          , Template::UserManual => "User Manual Intro"
        }
    }

    /// Hint for what the input field should contain
    pub fn placeholder(&self) -> &'static str
    {   match self
        {   Template::ApiGuide =>
              "Enter API name or feature (e.g., REST API, GraphQL)"
          , Template::CodeComments =>
              "Paste your code snippet here"
          , Template::SetupInstructions =>
              "Enter software/tool name (e.g., Docker, Node.js)"
          , Template::Troubleshooting =>
              "Describe the issue (e.g., Connection timeout error)"
          , Template::UserManual =>
              "Enter tool/product name"
        }
    }

    /// Catalog entries for every template
    pub fn catalog() -> Vec<TemplateInfo>
    {   Template::ALL
          .iter()
          .map(|t| TemplateInfo
            {   id: t.id().to_string()
              , name: t.display_name().to_string()
              , placeholder: t.placeholder().to_string()
            })
          .collect()
    }
}

impl FromStr for Template
{   type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   Template::ALL
          .iter()
          .copied()
          .find(|t| t.id() == s)
          .ok_or_else(|| {
            crate::error::Error::UnknownTemplate(s.to_string())
          })
    }
}

/// Catalog entry served by `GET /templates`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo
{   pub id: String
  , pub name: String
  , pub placeholder: String
}

/// Who the documentation is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience
{   Beginners
  , Developers
  , Advanced
}

impl Audience
{   /// Unrecognized labels yield `None` rather than an error
    pub fn from_label(label: &str) -> Option<Self>
    {   match label
        {   "beginners" => Some(Audience::Beginners)
          , "developers" => Some(Audience::Developers)
          , "advanced" => Some(Audience::Advanced)
          , _ => None
        }
    }
}

/// How much depth the documentation should have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLevel
{   Brief
  , Moderate
  , Comprehensive
}

impl DetailLevel
{   /// Unrecognized labels yield `None` rather than an error
    pub fn from_label(label: &str) -> Option<Self>
    {   match label
        {   "brief" => Some(DetailLevel::Brief)
          , "moderate" => Some(DetailLevel::Moderate)
          , "comprehensive" => Some(DetailLevel::Comprehensive)
          , _ => None
        }
    }
}

/// Output markup requested from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat
{   Markdown
  , Plain
}

impl OutputFormat
{   /// Anything other than "markdown" is plain text
    pub fn from_label(label: &str) -> Self
    {   if label == "markdown"
        {   OutputFormat::Markdown
        } else
        {   OutputFormat::Plain
        }
    }
}
