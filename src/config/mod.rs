//! Application configuration

pub mod prompts;

use std::env;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub use prompts::builtin as prompts_builtin;

/// Model used when `MODEL_NAME` is not set
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Public OpenAI endpoint, used when `OPENAI_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model_name: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match var("PORT") {
            Some(p) => p
                .parse()
                .with_context(|| format!("PORT must be a port number, got {p:?}"))?,
            None => 8000,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port,
            model_name: var("MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL.into()),
            openai_api_key: var("OPENAI_API_KEY"),
            openai_base_url: var("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
        })
    }
}
