//! Re-exports from all modules
mod client;
mod config;
mod credential;
mod extract;
mod message;
mod prompt;

pub mod gate;

#[cfg(test)]
mod mock_server;

use thiserror::Error;

/// Result type for emx-mirage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for emx-mirage operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Completion request could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Outbound request could not be constructed
    #[error("Request error: {0}")]
    Request(#[source] reqwest::Error),

    /// Upstream call failed at the transport level
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Upstream reply body could not be read
    #[error("Body error: {0}")]
    Body(#[source] reqwest::Error),
}

pub use client::{AnthropicClient, Client};
pub use config::UpstreamConfig;
pub use credential::{resolve_api_key, scan_env_file, API_KEY_VAR};
pub use extract::{extract_html, fallback_document, unescape};
pub use message::{Message, MessageRole};
pub use prompt::{build_prompt, CompletionRequest};
