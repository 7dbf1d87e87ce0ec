use thiserror::Error;

/// Errors that can occur while obtaining AI-generated content.
///
/// Always absorbed at the view boundary: a failed fetch renders as an
/// inline message in the view that requested it and touches nothing else.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Failed to reach the remote service.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// The service replied with a non-success HTTP status.
    #[error("Upstream error: {status} - {body_head}")]
    Status { status: u16, body_head: String },

    /// The reply carried no candidate text at all.
    #[error("Empty reply from model")]
    EmptyReply,

    /// The reply text was not valid JSON after stripping optional fencing.
    #[error("Invalid JSON in model reply: {detail}")]
    InvalidJson { detail: String, payload_head: String },
}

impl ProviderError {
    /// True for failures worth one more attempt at the transport level.
    /// Malformed bodies are not: the model already answered.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Connection { .. } | ProviderError::Timeout { .. } => true,
            ProviderError::Status { status, .. } => *status >= 500,
            ProviderError::EmptyReply | ProviderError::InvalidJson { .. } => false,
        }
    }
}

/// Truncate a payload for error messages and logs.
pub(crate) fn head(payload: &str) -> String {
    const MAX: usize = 120;
    if payload.chars().count() <= MAX {
        payload.to_string()
    } else {
        let truncated: String = payload.chars().take(MAX).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        let err = ProviderError::Status {
            status: 503,
            body_head: "overloaded".to_string(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let err = ProviderError::Status {
            status: 400,
            body_head: "bad request".to_string(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn invalid_json_is_not_retryable() {
        let err = ProviderError::InvalidJson {
            detail: "expected value".to_string(),
            payload_head: "not json".to_string(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn head_truncates_long_payloads() {
        let long = "x".repeat(500);
        let h = head(&long);
        assert!(h.chars().count() <= 121);
        assert!(h.ends_with('…'));
    }
}
