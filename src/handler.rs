use log::{debug, info, error};
use crate::composer::{self, DEFAULT_LANGUAGE};
use crate::providers::{ChatMessage, GatewayClient};
use crate::request::{
  ChatContext, ChatReply, ChatRequest, DocumentationResponse,
  GenerationRequest,
};
use crate::{Audience, DetailLevel, OutputFormat, Template};

/// Fixed persona for the help chatbot
pub const ASSISTANT_PERSONA: &str = "You are a friendly AI assistant for DocGen, a technical documentation generator. Your role is to:
1. Help users choose the right documentation template
2. Provide suggestions for improving their documentation
3. Guide them through the document creation process
4. Answer questions about technical writing best practices

Be conversational, helpful, and concise. If a user mentions a specific topic, suggest which template would work best (API Guide, Code Comments, Setup Instructions, Troubleshooting Guide, or User Manual).";

/// A generation request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentationJob
{   pub template: Template
  , /// Trimmed, non-empty
    pub input: String
  , pub audience: Option<Audience>
  , pub detail: Option<DetailLevel>
  , pub format: OutputFormat
  , pub language: String
}

impl DocumentationJob
{   /// Validate a wire request.
    ///
    /// Missing fields are reported before the template id is checked.
    pub fn from_request(request: &GenerationRequest)
      -> Result<Self, crate::error::Error>
    {   let template_id = non_blank(request.template.as_deref())
          .ok_or_else(|| {
            crate::error::Error::MissingField("template".to_string())
          })?;
        let input = non_blank(request.input.as_deref())
          .ok_or_else(|| {
            crate::error::Error::MissingField("input".to_string())
          })?;
        let template: Template = template_id.parse()?;

        Ok(DocumentationJob
        {   template
          , input: input.trim().to_string()
          , audience: request.audience.as_deref()
              .and_then(Audience::from_label)
          , detail: request.detail_level.as_deref()
              .and_then(DetailLevel::from_label)
          , format: OutputFormat::from_label(
              request.format.as_deref().unwrap_or_default()
            )
          , language: non_blank(request.language.as_deref())
              .unwrap_or(DEFAULT_LANGUAGE)
              .to_string()
        })
    }

    pub fn prompt(&self) -> String
    {   composer::compose_prompt(
          self.template
        , &self.input
        , self.audience
        , self.detail
        , self.format
        , &self.language
        )
    }
}

/// System prompt for the chat assistant, with optional work context
pub fn chat_system_prompt(context: Option<&ChatContext>) -> String
{   let mut prompt = ASSISTANT_PERSONA.to_string();
    if let Some(context) = context
    {   if let Some(template) = non_blank(context.current_template.as_deref())
        {   prompt.push_str(&format!(
              "\n\nThe user is currently working with the \"{}\" template.",
              template
            ));
        }
        if let Some(input) = non_blank(context.current_input.as_deref())
        {   prompt.push_str(&format!(
              "\n\nTheir current input is: \"{}\"",
              input
            ));
        }
    }
    prompt
}

fn non_blank(value: Option<&str>) -> Option<&str>
{   value.filter(|v| !v.trim().is_empty())
}

/// Request handlers for documentation generation and the help chat.
///
/// Stateless apart from immutable configuration; share it freely
/// between concurrent requests.
#[derive(Debug, Clone)]
pub struct DocGenHandler
{   gateway: GatewayClient
}

impl DocGenHandler
{   pub fn new(config: crate::config::GatewayConfig) -> Self
    {   debug!("Creating DocGenHandler");
        DocGenHandler
        {   gateway: GatewayClient::new(config)
        }
    }

    /// Validate, compose, make one gateway call
    pub async fn generate_documentation(
      &self
    , request: GenerationRequest
    ) -> Result<DocumentationResponse, crate::error::Error>
    {   let job = DocumentationJob::from_request(&request)
          .map_err(|e| {
            debug!("Rejected generation request: {}", e);
            e
          })?;

        info!(
          "Generating documentation: template={} audience={:?} detail={:?} format={:?} language={}",
          job.template.id(), job.audience, job.detail, job.format, job.language
        );

        let prompt = job.prompt();
        let documentation = self.gateway
          .complete(vec![ChatMessage::system(prompt)], None)
          .await
          .map_err(|e| {
            error!("Error in generate-documentation: {}", e);
            e
          })?;

        info!("Documentation generated successfully");
        Ok(DocumentationResponse { documentation })
    }

    /// Answer a help-chat message in the assistant persona
    pub async fn chat(
      &self
    , request: ChatRequest
    ) -> Result<ChatReply, crate::error::Error>
    {   let ChatRequest { message, context, session_id } = request;
        let message = non_blank(message.as_deref())
          .ok_or_else(|| {
            crate::error::Error::MissingField("message".to_string())
          })?
          .to_string();

        debug!("Chat assistant message for session {:?}", session_id);

        let messages = vec![
          ChatMessage::system(chat_system_prompt(context.as_ref()))
        , ChatMessage::user(message)
        ];
        let max_tokens = Some(self.gateway.config().chat_max_tokens);

        let reply = self.gateway
          .complete(messages, max_tokens)
          .await
          .map_err(|e| {
            error!("Chat assistant error: {}", e);
            e
          })?;

        Ok(ChatReply
        {   message: reply
          , session_id
        })
    }
}
