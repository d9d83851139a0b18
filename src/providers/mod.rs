//! Outbound LLM provider clients

pub mod gateway;

// Re-export for convenience
pub use gateway::{ChatMessage, GatewayClient};
