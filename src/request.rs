//! Wire request and response types for the inbound HTTP API

use serde::{Deserialize, Serialize};

/// Body of `POST /generate-documentation`
///
/// Every field is optional so that an incomplete body still decodes
/// and is rejected by validation with a precise field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest
{   /// Template id, e.g. "api-guide"
    #[serde(default)]
    pub template: Option<String>
  , /// Topic, product name, code snippet or problem description
    #[serde(default)]
    pub input: Option<String>
  , #[serde(default)]
    pub audience: Option<String>
  , #[serde(default)]
    pub detail_level: Option<String>
  , #[serde(default)]
    pub format: Option<String>
  , /// Output language label, "english" when absent
    #[serde(default)]
    pub language: Option<String>
}

/// Successful generation reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationResponse
{   pub documentation: String
}

/// What the user is working on while chatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext
{   #[serde(default)]
    pub current_template: Option<String>
  , #[serde(default)]
    pub current_input: Option<String>
}

/// Body of `POST /chat-assistant`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest
{   #[serde(default)]
    pub message: Option<String>
  , #[serde(default)]
    pub context: Option<ChatContext>
  , /// Opaque client session id, echoed back
    #[serde(default)]
    pub session_id: Option<String>
}

/// Chat assistant reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply
{   pub message: String
  , /// Omitted from the reply when the request carried none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>
}

/// Error body returned for every failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse
{   pub error: String
}

impl From<&crate::error::Error> for ErrorResponse
{   fn from(err: &crate::error::Error) -> Self
    {   ErrorResponse
        {   error: err.to_string()
        }
    }
}
