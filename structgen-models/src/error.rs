//! Model-related error types.

use std::time::Duration;
use thiserror::Error;

/// Transport or provider failure from a completion model.
///
/// Every variant is fatal for the generate call it occurs in: the retry
/// budget is reserved for malformed output, not transport problems.
#[derive(Debug, Error)]
pub enum ModelError {
    /// HTTP error from the API.
    #[error("HTTP error: {status} - {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// API-level error.
    #[error("API error: {message}")]
    Api {
        /// Error message.
        message: String,
        /// Error code.
        code: Option<String>,
    },

    /// Request timeout.
    #[error("request timeout after {0:?}")]
    Timeout(Duration),

    /// Rate limited by the API.
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested retry delay.
        retry_after: Option<Duration>,
    },

    /// Authentication failed.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// The provider replied with something that is not a completion.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Model-side configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ModelError {
    /// Whether a fresh request might succeed.
    ///
    /// The generation loop never acts on this; it exists for callers that
    /// wrap the model with their own transport-level retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::RateLimited { .. } => true,
            Self::Connection(_) => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Get the retry-after hint if applicable.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }

    /// Create an API error.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            code: None,
        }
    }

    /// Create an API error with a provider error code.
    pub fn api_with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Create an HTTP error.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_retryable() {
        assert!(ModelError::Timeout(Duration::from_secs(30)).is_retryable());
        assert!(ModelError::RateLimited { retry_after: None }.is_retryable());
        assert!(ModelError::connection("reset").is_retryable());
        assert!(ModelError::http(500, "server error").is_retryable());

        assert!(!ModelError::http(400, "bad request").is_retryable());
        assert!(!ModelError::auth("invalid key").is_retryable());
        assert!(!ModelError::api("boom").is_retryable());
    }

    #[test]
    fn test_retry_after() {
        let err = ModelError::RateLimited {
            retry_after: Some(Duration::from_secs(60)),
        };
        assert_eq!(err.retry_after(), Some(Duration::from_secs(60)));
        assert_eq!(ModelError::api("boom").retry_after(), None);
    }

    #[test]
    fn test_display() {
        let err = ModelError::api_with_code("quota exceeded", "INSUFFICIENT_QUOTA");
        assert!(err.to_string().contains("quota exceeded"));

        let err = ModelError::http(404, "not found");
        assert!(err.to_string().contains("404"));
    }
}
