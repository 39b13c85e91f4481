//! API key resolution
//!
//! The key comes from the `ANTHROPIC_API_KEY` environment variable, or failing
//! that from the first `ANTHROPIC_API_KEY=` line of an env file. The file is
//! scanned literally: no quoting, no escaping, no trimming.

use super::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Environment variable (and env file prefix) holding the API key
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Resolve the API key, preferring `env_value` over the contents of `env_file`.
///
/// Returns [`Error::Config`] when neither source yields a non-empty value.
pub fn resolve_api_key(env_value: Option<String>, env_file: &Path) -> Result<String> {
    if let Some(key) = env_value.filter(|k| !k.is_empty()) {
        debug!("Using {} from environment", API_KEY_VAR);
        return Ok(key);
    }

    let from_file = match std::fs::read_to_string(env_file) {
        Ok(content) => scan_env_file(&content),
        Err(e) => {
            debug!("Could not read {}: {}", env_file.display(), e);
            None
        }
    };

    match from_file {
        Some(key) if !key.is_empty() => {
            debug!("Using {} from {}", API_KEY_VAR, env_file.display());
            Ok(key)
        }
        _ => Err(Error::Config(format!(
            "{} not found in environment or {} file",
            API_KEY_VAR,
            env_file.display()
        ))),
    }
}

/// Return the remainder of the first line starting with `ANTHROPIC_API_KEY=`.
pub fn scan_env_file(content: &str) -> Option<String> {
    let prefix = format!("{}=", API_KEY_VAR);
    content
        .split('\n')
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .map(str::to_string)
}
