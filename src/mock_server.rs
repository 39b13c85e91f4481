//! Mock Anthropic server for testing the gateway offline
//!
//! Wraps a wiremock server that answers `POST /v1/messages` the way the real
//! API does, so tests can run without an API key.

use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Anthropic mock server for testing
pub struct AnthropicMockServer {
    server: MockServer,
}

impl AnthropicMockServer {
    /// Create a new Anthropic mock server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the base URL of this mock server
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Answer exactly one authenticated message request with `text` as the assistant reply
    pub async fn mock_message(&self, api_key: &str, text: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", api_key))
            .and(header("anthropic-version", "2023-06-01"))
            .and(header("content-type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "id": "msg-mock",
                    "type": "message",
                    "role": "assistant",
                    "content": [{
                        "type": "text",
                        "text": text
                    }],
                    "model": "claude-3-7-sonnet-20250219",
                    "stop_reason": "end_turn",
                    "usage": {
                        "input_tokens": 10,
                        "output_tokens": 40
                    }
                })),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer every message request with an Anthropic-style error
    pub async fn mock_error(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "type": "error",
                "error": {
                    "type": "api_error",
                    "message": message
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Requests the server has seen so far
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
