//! Errors of the fetch layer
//!
//! Every failure here is recoverable: the screens keep their previous data
//! and show the message to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not signed in")]
    Unauthorized,

    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    Parse(String),

    /// Backend answered but reported failure
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Builds a rejection from the backend message, falling back to `default`
    pub fn rejected(message: Option<&str>, default: &str) -> Self {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(default);
        ApiError::Rejected(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_fallback() {
        assert_eq!(
            ApiError::rejected(Some("Token expired"), "Failed to fetch scraps").to_string(),
            "Token expired"
        );
        assert_eq!(
            ApiError::rejected(Some("  "), "Failed to fetch scraps").to_string(),
            "Failed to fetch scraps"
        );
        assert_eq!(
            ApiError::rejected(None, "Failed to fetch scraps").to_string(),
            "Failed to fetch scraps"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Status(502).to_string(), "server responded with HTTP 502");
        assert_eq!(ApiError::Unauthorized.to_string(), "not signed in");
    }
}
