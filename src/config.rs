//! Configuration for the gateway client and the HTTP server

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use log::{debug, warn};

pub const DEFAULT_API_BASE: &str = "https://ai.gateway.lovable.dev/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub const ENV_API_KEY: &str = "AI_GATEWAY_API_KEY";
pub const ENV_API_BASE: &str = "AI_GATEWAY_URL";
pub const ENV_MODEL: &str = "AI_GATEWAY_MODEL";
pub const ENV_BIND_ADDR: &str = "DOCGEN_BIND_ADDR";

/// Chat-completion gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig
{   /// API base URL, `/chat/completions` is appended
    pub api_base: String
  , /// Model identifier sent with every request
    pub model: String
  , /// Bearer credential; requests fail fast when absent
    #[serde(skip_serializing)]
    pub api_key: Option<String>
  , /// Sampling temperature for both handlers
    pub temperature: f32
  , /// Max tokens for chat assistant replies
    pub chat_max_tokens: usize
}

impl Default for GatewayConfig
{   fn default() -> Self
    {   GatewayConfig
        {   api_base: DEFAULT_API_BASE.to_string()
          , model: DEFAULT_MODEL.to_string()
          , api_key: None
          , temperature: 0.7
          , chat_max_tokens: 500
        }
    }
}

impl GatewayConfig
{   /// Full URL of the chat-completion endpoint
    pub fn completions_url(&self) -> String
    {   format!(
          "{}/chat/completions",
          self.api_base.trim_end_matches('/')
        )
    }

    fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.api_base.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "api_base must not be empty".to_string()
            ));
        }
        if self.model.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "model must not be empty".to_string()
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature)
        {   return Err(crate::error::Error::InvalidConfiguration(
              format!("temperature out of range: {}", self.temperature)
            ));
        }
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig
{   /// Address the HTTP listener binds to
    pub bind_addr: String
  , /// Outbound gateway settings
    pub gateway: GatewayConfig
}

impl Default for ServerConfig
{   fn default() -> Self
    {   ServerConfig
        {   bind_addr: DEFAULT_BIND_ADDR.to_string()
          , gateway: GatewayConfig::default()
        }
    }
}

impl ServerConfig
{   /// Defaults overridden by process environment
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Load from a JSON file, then apply environment overrides
    pub fn from_json_file(path: &str)
      -> Result<Self, crate::error::Error>
    {   debug!("Loading configuration from {}", path);
        let text = fs::read_to_string(path).map_err(|e| {
          crate::error::Error::InvalidConfiguration(
            format!("cannot read {}: {}", path, e)
          )
        })?;
        Self::from_json_str(&text, |name| std::env::var(name).ok())
    }

    /// Parse JSON configuration, then apply overrides from `lookup`
    pub fn from_json_str<F>(text: &str, lookup: F)
      -> Result<Self, crate::error::Error>
    where
      F: Fn(&str) -> Option<String>
    {   let config: ServerConfig = serde_json::from_str(text)
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(
              format!("cannot parse configuration: {}", e)
            )
          })?;
        config.with_overrides(lookup)
    }

    /// Apply overrides from `lookup`, then validate
    pub fn with_overrides<F>(mut self, lookup: F)
      -> Result<Self, crate::error::Error>
    where
      F: Fn(&str) -> Option<String>
    {   if let Some(addr) = lookup(ENV_BIND_ADDR)
        {   self.bind_addr = addr;
        }
        if let Some(base) = lookup(ENV_API_BASE)
        {   self.gateway.api_base = base;
        }
        if let Some(model) = lookup(ENV_MODEL)
        {   self.gateway.model = model;
        }
        if let Some(key) = lookup(ENV_API_KEY)
        {   self.gateway.api_key = Some(key);
        }
        self.gateway.api_key = self.gateway.api_key
          .take()
          .filter(|k| !k.trim().is_empty());
        if self.gateway.api_key.is_none()
        {   warn!("{} is not set; generation requests will fail", ENV_API_KEY);
        }

        self.socket_addr()?;
        self.gateway.validate()?;
        Ok(self)
    }

    /// Parsed bind address
    pub fn socket_addr(&self) -> Result<SocketAddr, crate::error::Error>
    {   self.bind_addr.parse().map_err(|_| {
          crate::error::Error::InvalidConfiguration(
            format!("invalid bind address: {}", self.bind_addr)
          )
        })
    }
}
