//! Error types for enjambre operations.

use std::fmt;

use thiserror::Error;

/// Main error type for enjambre operations.
///
/// The only checked failure class is a rejected configuration at
/// construction time: bad population sizes, mismatched bound vectors, or
/// inverted bounds. Everything past construction is infallible; panics
/// raised by a caller-supplied objective propagate untouched.
///
/// # Examples
///
/// ```
/// use enjambre::error::EnjambreError;
///
/// let err = EnjambreError::InvalidConfiguration {
///     param: "particles".to_string(),
///     value: "0".to_string(),
///     constraint: "> 0".to_string(),
/// };
/// assert!(err.to_string().contains("particles"));
/// ```
#[derive(Debug, Error)]
pub enum EnjambreError {
    /// Configuration rejected before any optimization ran.
    #[error("invalid configuration: {param} = {value}, expected {constraint}")]
    InvalidConfiguration {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl EnjambreError {
    /// Create an `InvalidConfiguration` error with descriptive context.
    #[must_use]
    pub fn invalid_configuration(
        param: &str,
        value: impl fmt::Display,
        constraint: &str,
    ) -> Self {
        Self::InvalidConfiguration {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, EnjambreError>;
