//! Upstream (Anthropic Messages API) configuration
//!
//! Every field except the API key can come from the `[upstream]` table of the
//! TOML config file. The key is resolved separately at startup, see
//! [`crate::resolve_api_key`].

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the upstream completion API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// API key
    #[serde(skip)]
    pub api_key: String,

    /// Value of the `anthropic-version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Model identifier sent with every completion request
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum output tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds; `None` keeps the transport default (no timeout)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: String::new(),
            api_version: default_api_version(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: None,
        }
    }
}

fn default_api_base() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

fn default_model() -> String {
    "claude-3-7-sonnet-20250219".to_string()
}

fn default_max_tokens() -> u32 {
    4096
}

impl UpstreamConfig {
    /// Create a configuration with default settings and the given key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Full URL of the messages endpoint
    pub fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.api_base.trim_end_matches('/'))
    }

    /// Request timeout, if one was configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
