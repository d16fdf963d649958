//! Configuration from environment variables.
//!
//! `.env` is loaded first (via dotenvy) so the API key can live next to the
//! binary. The key is only ever sourced from the environment, never from a
//! config file format of our own.

use std::env;

use thiserror::Error;

/// Default chat-completion endpoint.
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-exp:free";

/// Default per-request HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 90;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "OPENROUTER_API_KEY not found. Please ensure the .env file exists with OPENROUTER_API_KEY defined."
    )]
    MissingApiKey,
    #[error("invalid ZAPIO_TIMEOUT_SECONDS value '{0}': expected a positive integer")]
    InvalidTimeout(String),
}

/// Fully-resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full chat-completions endpoint URL (`ZAPIO_API_URL` override).
    pub api_url: String,
    /// Model name passed in the request body (`ZAPIO_MODEL` override).
    pub model: String,
    /// Per-request HTTP timeout in seconds (`ZAPIO_TIMEOUT_SECONDS` override).
    pub timeout_seconds: u64,
    /// Bearer token from `OPENROUTER_API_KEY`. Required.
    pub api_key: String,
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        // Missing .env is fine as long as the key is in the environment.
        let _ = dotenvy::dotenv();
        Self::from_env_snapshot(
            env::var("OPENROUTER_API_KEY").ok(),
            env::var("ZAPIO_API_URL").ok(),
            env::var("ZAPIO_MODEL").ok(),
            env::var("ZAPIO_TIMEOUT_SECONDS").ok(),
        )
    }

    fn from_env_snapshot(
        api_key: Option<String>,
        api_url: Option<String>,
        model: Option<String>,
        timeout: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let timeout_seconds = match timeout {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|t| *t > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout_seconds,
            api_key,
        })
    }
}
