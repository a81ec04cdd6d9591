//! Core error types.

use thiserror::Error;

/// Invalid [`ModelConfig`](crate::ModelConfig) parameters.
///
/// Raised at construction time and never retried.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A numeric parameter is outside its allowed range.
    #[error("{parameter} is {value} but must be within [{min}, {max}]")]
    OutOfRange {
        /// Parameter name.
        parameter: &'static str,
        /// Provided value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },

    /// Any other invalid parameter.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create an out-of-range error.
    pub fn out_of_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            parameter,
            value,
            min,
            max,
        }
    }

    /// Create a generic invalid-parameter error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
