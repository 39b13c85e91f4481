//! HTML extraction from raw completion replies
//!
//! The reply body is searched as raw bytes rather than decoded as JSON, so
//! the captured span still carries JSON string escapes. Only `\n`, `\t` and
//! `\"` are undone; anything else (`\\`, `\u003c`, ...) passes through.
//! Bytes that are not valid UTF-8 are kept as they arrived.

use regex::bytes::Regex;
use std::sync::LazyLock;

// `-u` lets `.` match any byte, not only complete UTF-8 sequences.
static HTML_DOCUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s-u)<!DOCTYPE html>.*?</html>").expect("document pattern is valid")
});

const FALLBACK_HEAD: &[u8] = b"<html><body><h1>Error</h1>\
    <p>Failed to extract HTML content from API response.</p><pre>";
const FALLBACK_TAIL: &[u8] = b"</pre></body></html>";

/// Extract the first `<!DOCTYPE html>` … `</html>` span from `raw`.
///
/// Falls back to [`fallback_document`] when no such span exists.
pub fn extract_html(raw: &[u8]) -> Vec<u8> {
    match HTML_DOCUMENT.find(raw) {
        Some(m) => unescape(m.as_bytes()),
        None => {
            tracing::warn!("No HTML document in upstream reply ({} bytes)", raw.len());
            fallback_document(raw)
        }
    }
}

/// Undo the `\n`, `\t` and `\"` escapes.
///
/// A single left-to-right scan; gives the same result as replacing the three
/// sequences one after another, since no replacement yields a backslash.
pub fn unescape(s: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        let replacement = match (s[i], s.get(i + 1)) {
            (b'\\', Some(b'n')) => Some(b'\n'),
            (b'\\', Some(b't')) => Some(b'\t'),
            (b'\\', Some(b'"')) => Some(b'"'),
            _ => None,
        };
        match replacement {
            Some(byte) => {
                out.push(byte);
                i += 2;
            }
            None => {
                out.push(s[i]);
                i += 1;
            }
        }
    }
    out
}

/// Error page embedding the raw reply verbatim
pub fn fallback_document(raw: &[u8]) -> Vec<u8> {
    let mut page = Vec::with_capacity(FALLBACK_HEAD.len() + raw.len() + FALLBACK_TAIL.len());
    page.extend_from_slice(FALLBACK_HEAD);
    page.extend_from_slice(raw);
    page.extend_from_slice(FALLBACK_TAIL);
    page
}
