//! Chat-completion API access.
//!
//! [`LlmClient`] is a thin adapter over the OpenRouter `/chat/completions`
//! endpoint; [`prompts`] holds the fixed instructional prompts for each
//! study mode. All wire types are private to `client`; callers see only
//! `complete(&str) -> String`.

mod client;
pub mod prompts;

pub use client::LlmClient;

use thiserror::Error;

/// Error talking to the chat-completion API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("empty or missing content in response")]
    EmptyContent,
}
