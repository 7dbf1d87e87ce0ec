//! Markdown fence stripping for model replies.
//!
//! The service is asked for JSON but may wrap the document in a
//! ```json … ``` code fence. Stripping is applied only when the fence is
//! actually present; an unfenced document passes through untouched.

use serde::de::DeserializeOwned;

use crate::provider::error::{head, ProviderError};

/// Remove a leading ```json fence and a trailing ``` fence, if present.
pub fn strip_code_fence(text: &str) -> &str {
    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest.trim_start();
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest.trim_end();
    }
    cleaned
}

/// Parse a (possibly fenced) model reply as JSON into `T`.
pub fn parse_fenced_json<T: DeserializeOwned>(text: &str) -> Result<T, ProviderError> {
    let cleaned = strip_code_fence(text);
    serde_json::from_str(cleaned).map_err(|e| ProviderError::InvalidJson {
        detail: e.to_string(),
        payload_head: head(cleaned),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfenced_passes_through() {
        assert_eq!(strip_code_fence(r#"{"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn fenced_and_unfenced_parse_identically() {
        let plain: serde_json::Value = parse_fenced_json(r#"{"a": [1, 2]}"#).unwrap();
        let fenced: serde_json::Value =
            parse_fenced_json("```json\n{\"a\": [1, 2]}\n```").unwrap();
        assert_eq!(plain, fenced);
    }

    #[test]
    fn fence_with_surrounding_whitespace() {
        let parsed: serde_json::Value =
            parse_fenced_json("  ```json\n  {\"ok\": true}\n```  \n").unwrap();
        assert_eq!(parsed, serde_json::json!({"ok": true}));
    }

    #[test]
    fn leading_fence_without_trailing() {
        assert_eq!(strip_code_fence("```json\n{}"), "{}");
    }

    #[test]
    fn trailing_fence_without_leading() {
        assert_eq!(strip_code_fence("{}\n```"), "{}");
    }

    #[test]
    fn malformed_reply_is_invalid_json() {
        let err = parse_fenced_json::<serde_json::Value>("```json\nnot json at all\n```")
            .unwrap_err();
        match err {
            ProviderError::InvalidJson { payload_head, .. } => {
                assert!(payload_head.contains("not json"));
            }
            other => panic!("expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn fences_inside_strings_survive() {
        let parsed: serde_json::Value =
            parse_fenced_json(r#"{"text": "use ``` for code"}"#).unwrap();
        assert_eq!(parsed["text"], "use ``` for code");
    }
}
