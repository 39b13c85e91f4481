//! HTTP request handlers for the gateway

use crate::{extract_html, AnthropicClient, Client, CompletionRequest, Error, UpstreamConfig};
use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use std::sync::Arc;
use tracing::{debug, error};

/// Gateway state shared across handlers
#[derive(Clone)]
pub struct GatewayState {
    pub upstream: Arc<UpstreamConfig>,
    pub client: Arc<dyn Client>,
}

impl GatewayState {
    /// Build state backed by an [`AnthropicClient`]
    pub fn new(upstream: UpstreamConfig) -> crate::Result<Self> {
        let client = AnthropicClient::new(upstream.clone())?;
        Ok(Self::with_client(upstream, Arc::new(client)))
    }

    /// Build state around any client implementation
    pub fn with_client(upstream: UpstreamConfig, client: Arc<dyn Client>) -> Self {
        Self {
            upstream: Arc::new(upstream),
            client,
        }
    }
}

/// Handle every request: ask the model to imagine the page and relay its HTML
pub async fn simulate_handler(
    State(state): State<GatewayState>,
    method: Method,
    uri: Uri,
) -> Response {
    // Path is percent-decoded, query stays raw
    let path = percent_decode_str(uri.path()).decode_utf8_lossy();
    let query = uri.query().unwrap_or("");

    let request = CompletionRequest::for_request(&state.upstream, method.as_str(), &path, query);

    match state.client.complete_raw(&request).await {
        Ok(raw) => {
            debug!("Upstream reply for {} {}: {} bytes", method, uri, raw.len());
            let html = extract_html(&raw);
            ([(header::CONTENT_TYPE, "text/html")], html).into_response()
        }
        Err(e) => {
            error!("Simulation of {} {} failed: {}", method, uri, e);
            error_response(&e)
        }
    }
}

/// Map a per-request failure to a 500 with a short plain-text body
pub fn error_response(err: &Error) -> Response {
    let message = match err {
        Error::Json(_) | Error::Request(_) | Error::Config(_) => {
            "Failed to create request".to_string()
        }
        Error::Http(e) => format!("Failed to call Claude API: {}", e),
        Error::Body(_) => "Failed to read response".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_json_error_maps_to_create_request() {
        let err = Error::Json(serde_json::from_str::<u32>("nope").unwrap_err());
        let response = error_response(&err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Failed to create request");
    }

    #[tokio::test]
    async fn test_error_body_is_plain_text() {
        let response = error_response(&Error::Config("x".to_string()));
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }
}
