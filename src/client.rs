//! LLM client implementations

use super::{config::UpstreamConfig, prompt::CompletionRequest, Error, Result};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;

/// Build an HTTP client, applying the timeout only when one is configured
fn build_http_client(config: &UpstreamConfig) -> std::result::Result<HttpClient, reqwest::Error> {
    let mut builder = HttpClient::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Trait for LLM clients
#[async_trait::async_trait]
pub trait Client: Send + Sync {
    /// Send a completion request and return the reply body bytes, unparsed.
    ///
    /// The upstream status code is not interpreted; error replies are
    /// returned like any other body.
    async fn complete_raw(&self, request: &CompletionRequest) -> Result<Vec<u8>>;
}

/// Anthropic Messages API client
pub struct AnthropicClient {
    config: UpstreamConfig,
    http_client: HttpClient,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        Ok(AnthropicClient {
            http_client: build_http_client(&config).map_err(Error::Request)?,
            config,
        })
    }

    /// Settings this client was built with
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl Client for AnthropicClient {
    async fn complete_raw(&self, request: &CompletionRequest) -> Result<Vec<u8>> {
        let body = serde_json::to_vec(request)?;

        let http_request = self
            .http_client
            .post(self.config.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.api_version)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .build()
            .map_err(Error::Request)?;

        let response = self
            .http_client
            .execute(http_request)
            .await
            .map_err(Error::Http)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Anthropic API returned {}", status);
        }

        let body = response.bytes().await.map_err(Error::Body)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let client = AnthropicClient::new(UpstreamConfig::with_api_key("test-key")).unwrap();
        assert_eq!(client.config().model, "claude-3-7-sonnet-20250219");
        assert_eq!(client.config().api_key, "test-key");
    }

    #[tokio::test]
    async fn test_invalid_api_key_fails_to_build_request() {
        let client = AnthropicClient::new(UpstreamConfig::with_api_key("bad\nkey")).unwrap();
        let request = CompletionRequest::for_request(client.config(), "GET", "/", "");
        let result = client.complete_raw(&request).await;
        assert!(matches!(result, Err(Error::Request(_))));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_http_error() {
        let config = UpstreamConfig {
            api_base: "http://127.0.0.1:1".to_string(),
            ..UpstreamConfig::with_api_key("test-key")
        };
        let client = AnthropicClient::new(config).unwrap();
        let request = CompletionRequest::for_request(client.config(), "GET", "/", "");
        let result = client.complete_raw(&request).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
