//! Completion provider integrations

mod openai_compat;
#[cfg(test)]
mod stub;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::conversation::Message;

pub use openai_compat::{OpenAICompatConfig, OpenAICompatProvider};
#[cfg(test)]
pub use stub::StubProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A text-completion backend.
///
/// Given the full conversation and a model identifier, returns the raw reply
/// text. Implementations do not retry and never substitute placeholder text
/// for a missing reply.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, messages: &[Message], model: &str) -> Result<String, ProviderError>;
}
