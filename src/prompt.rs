//! Prompt synthesis for simulated web requests

use super::{config::UpstreamConfig, message::Message};
use serde::Serialize;

/// Body of a POST to the messages endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Build the single-message request describing one inbound HTTP request
    pub fn for_request(config: &UpstreamConfig, method: &str, path: &str, query: &str) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            messages: vec![Message::user(build_prompt(method, path, query))],
        }
    }
}

/// Instruction asking the model to play web server for `method path?query`.
///
/// The request is interpolated twice: once as labeled fields and once as a
/// trailing request line. Inputs are embedded verbatim.
pub fn build_prompt(method: &str, path: &str, query: &str) -> String {
    format!(
        "You are simulating a web server. Generate an HTML response for: \
         Method: {method}, Path: {path}, Query: {query}. \
         Return only valid HTML with no explanations. \
         Start your response with exactly <!DOCTYPE html>. \
         Make a web application that is fully usable. \
         Make sure the links point to the correct path. \
         Do not include any other text or explanations. \
         Make it colorful. \
         The request is: {method} {path}?{query}"
    )
}
