use serde::{Deserialize, Serialize};
use log::{debug, trace, error, warn};
use reqwest::StatusCode;

// ===== Message Types =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   #[serde(default)]
    pub message: Option<ResponseMessage>
  , #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage
{   #[serde(default)]
    pub content: Option<String>
}

// ===== Gateway Client =====

/// Client for an OpenAI-compatible chat-completion gateway.
///
/// Cheap to clone; holds no per-request state, so concurrent calls
/// are independent. Each call is a single attempt.
#[derive(Debug, Clone)]
pub struct GatewayClient
{   config: crate::config::GatewayConfig
  , http_client: reqwest::Client
}

impl GatewayClient
{   pub fn new(config: crate::config::GatewayConfig) -> Self
    {   debug!("Creating GatewayClient for {}", config.api_base);
        GatewayClient
        {   config
          , http_client: reqwest::Client::new()
        }
    }

    pub fn config(&self) -> &crate::config::GatewayConfig
    {   &self.config
    }

    /// Fails with `MissingApiKey` when no credential was configured
    pub fn api_key(&self) -> Result<&str, crate::error::Error>
    {   self.config.api_key.as_deref().ok_or_else(|| {
          error!("No gateway API key configured");
          crate::error::Error::MissingApiKey
        })
    }

    /// Send one chat-completion request and return the first choice
    pub async fn complete(
      &self
    , messages: Vec<ChatMessage>
    , max_tokens: Option<usize>
    ) -> Result<String, crate::error::Error>
    {   let api_key = self.api_key()?;

        let request = ChatCompletionRequest
        {   model: self.config.model.clone()
          , messages
          , temperature: self.config.temperature
          , max_tokens
        };

        trace!("Gateway request: {:?}", request);

        let response = self.http_client
          .post(self.config.completions_url())
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::UpstreamFailure(e.to_string())
          })?;

        let status = response.status();
        trace!("Gateway response status: {}", status);

        if !status.is_success()
        {   // A truncated body must not mask a 429 or 402
            let body = response.text().await.unwrap_or_default();
            error!("AI gateway error: {} {}", status, body);
            return Err(classify_status(status, &body));
        }

        let body = response.text().await.map_err(|e| {
          error!("Failed to read gateway body: {}", e);
          crate::error::Error::UpstreamFailure(e.to_string())
        })?;

        parse_completion(&body)
    }
}

/// Map a non-success gateway status to the error taxonomy
pub fn classify_status(
  status: StatusCode
, body: &str
) -> crate::error::Error
{   match status
    {   StatusCode::TOO_MANY_REQUESTS => {
          warn!("Gateway rate limit hit");
          crate::error::Error::RateLimited
        }
      , StatusCode::PAYMENT_REQUIRED => {
          warn!("Gateway reports payment required");
          crate::error::Error::PaymentRequired
        }
      , _ => {
          let detail = extract_error_message(body)
            .unwrap_or_else(|| status.to_string());
          crate::error::Error::UpstreamFailure(detail)
        }
    }
}

/// Best-effort message from an error body.
/// Recognizes `{"error": {"message": ..}}`, `{"error": ".."}`
/// and `{"message": ".."}`.
pub fn extract_error_message(body: &str) -> Option<String>
{   let value: serde_json::Value = serde_json::from_str(body).ok()?;
    fn text(v: Option<&serde_json::Value>) -> Option<&str>
    {   v.and_then(serde_json::Value::as_str)
          .filter(|m| !m.trim().is_empty())
    }
    text(value.pointer("/error/message"))
      .or_else(|| text(value.get("error")))
      .or_else(|| text(value.get("message")))
      .map(str::to_string)
}

/// Pull `choices[0].message.content` out of a success body
pub fn parse_completion(body: &str)
  -> Result<String, crate::error::Error>
{   let chat_response: ChatCompletionResponse
      = serde_json::from_str(body).map_err(|e| {
        error!("Parse error: {}", e);
        crate::error::Error::UpstreamFailure(
          format!("malformed response: {}", e)
        )
      })?;

    let choice = chat_response.choices.into_iter().next()
      .ok_or_else(|| {
        error!("No choices in response");
        crate::error::Error::UpstreamFailure(
          "response contained no choices".to_string()
        )
      })?;

    if let Some(reason) = &choice.finish_reason
    {   debug!("Completion finished: {}", reason);
    }

    choice.message
      .and_then(|m| m.content)
      .ok_or_else(|| {
        error!("Choice carried no message content");
        crate::error::Error::UpstreamFailure(
          "response contained no message content".to_string()
        )
      })
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::error::Error;

    #[test]
    fn rate_limit_and_billing_statuses_are_classified()
    {   assert_eq!(
          classify_status(StatusCode::TOO_MANY_REQUESTS, "{}"),
          Error::RateLimited
        );
        assert_eq!(
          classify_status(StatusCode::PAYMENT_REQUIRED, ""),
          Error::PaymentRequired
        );
    }

    #[test]
    fn other_statuses_carry_extracted_message()
    {   assert_eq!(
          classify_status(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"message":"model not found"}}"#
          ),
          Error::UpstreamFailure("model not found".to_string())
        );
        assert_eq!(
          classify_status(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
          Error::UpstreamFailure("502 Bad Gateway".to_string())
        );
    }

    #[test]
    fn error_message_shapes()
    {   assert_eq!(
          extract_error_message(r#"{"error":"flat"}"#).as_deref(),
          Some("flat")
        );
        assert_eq!(
          extract_error_message(r#"{"message":"top level"}"#).as_deref(),
          Some("top level")
        );
        assert_eq!(
          extract_error_message(
            r#"{"error":{"code":503},"message":"upstream busy"}"#
          ).as_deref(),
          Some("upstream busy")
        );
        assert_eq!(
          extract_error_message(r#"{"error":"","message":"fallback"}"#)
            .as_deref(),
          Some("fallback")
        );
        assert_eq!(extract_error_message(r#"{"error":{"code":1}}"#), None);
        assert_eq!(extract_error_message("not json"), None);
    }

    #[test]
    fn completion_content_is_extracted()
    {   let body = r#"{"choices":[{"message":{"role":"assistant","content":"Hello"},"finish_reason":"stop"}]}"#;
        assert_eq!(parse_completion(body), Ok("Hello".to_string()));
    }

    #[test]
    fn malformed_or_empty_completions_are_upstream_failures()
    {   for body in [
          "not json"
        , r#"{"choices":[]}"#
        , r#"{"id":"x"}"#
        , r#"{"choices":[{"message":{}}]}"#
        ]
        {   assert!(matches!(
              parse_completion(body),
              Err(Error::UpstreamFailure(_))
            ));
        }
    }

    #[test]
    fn missing_key_fails_before_any_request()
    {   let client = GatewayClient::new(
          crate::config::GatewayConfig::default()
        );
        assert_eq!(client.api_key(), Err(Error::MissingApiKey));
    }
}
