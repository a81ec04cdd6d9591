//! Error types for payload decoding.

use thiserror::Error;

/// Failure to decode a candidate payload against a schema.
///
/// These errors are recoverable: the retry loop feeds their message back to
/// the model and asks it to correct itself.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The candidate text is not valid JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is absent.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A field has a value of the wrong type.
    #[error("field '{field}' has type {actual} but {expected} was expected")]
    TypeMismatch {
        /// Path to the offending field, e.g. `address.street` or `tags[2]`.
        field: String,
        /// Expected JSON type name.
        expected: &'static str,
        /// Actual JSON type name found.
        actual: &'static str,
    },

    /// The payload validated structurally but would not deserialize into
    /// the target type.
    #[error("failed to deserialize validated payload: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl DecodeError {
    /// Create a missing-field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create a type-mismatch error.
    pub fn mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}

/// Result type for decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = DecodeError::missing_field("name");
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_mismatch_display() {
        let err = DecodeError::mismatch("age", "integer", "string");
        let text = err.to_string();
        assert!(text.contains("age"));
        assert!(text.contains("integer"));
        assert!(text.contains("string"));
    }

    #[test]
    fn test_json_error_carries_parser_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err();
        let err = DecodeError::from(parse_err);
        assert!(err.to_string().contains("failed to parse JSON"));
    }
}
