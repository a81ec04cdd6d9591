//! Error type for structured generation.

use thiserror::Error;

use structgen_core::ConfigError;
use structgen_models::ModelError;
use structgen_output::DecodeError;

/// Failure of a single structured-generation call.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Invalid inference configuration; raised at construction, never
    /// retried.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The completion model failed at the transport or provider level.
    ///
    /// Surfaced immediately: the retry budget is reserved for malformed
    /// output, not transport failures.
    #[error("completion service failed: {0}")]
    Service(#[from] ModelError),

    /// Every attempt produced output that failed extraction or validation.
    #[error("failed to generate valid structured output after {attempts} attempts; last error: {last_error}")]
    Exhausted {
        /// Number of completion attempts made.
        attempts: u32,
        /// The decode failure from the final attempt.
        last_error: DecodeError,
        /// The final attempt's raw model output, for diagnostics.
        last_response: String,
    },
}

impl GenerateError {
    /// The last raw model output, when the budget was exhausted.
    #[must_use]
    pub fn last_response(&self) -> Option<&str> {
        match self {
            Self::Exhausted { last_response, .. } => Some(last_response),
            _ => None,
        }
    }

    /// The last decode failure, when the budget was exhausted.
    #[must_use]
    pub fn last_error(&self) -> Option<&DecodeError> {
        match self {
            Self::Exhausted { last_error, .. } => Some(last_error),
            _ => None,
        }
    }
}

/// Result type for generation calls.
pub type GenerateResult<T> = Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_display_and_accessors() {
        let err = GenerateError::Exhausted {
            attempts: 3,
            last_error: DecodeError::missing_field("name"),
            last_response: "oops".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("3 attempts"));
        assert!(text.contains("name"));
        assert_eq!(err.last_response(), Some("oops"));
        assert!(err.last_error().is_some());
    }

    #[test]
    fn test_service_error_has_no_last_response() {
        let err = GenerateError::from(ModelError::auth("bad key"));
        assert_eq!(err.last_response(), None);
    }

    #[test]
    fn test_config_error_converts() {
        let config_err = structgen_core::ModelConfig::builder("m")
            .temperature(9.0)
            .build()
            .unwrap_err();
        let err: GenerateError = config_err.into();
        assert!(matches!(err, GenerateError::Configuration(_)));
    }
}
