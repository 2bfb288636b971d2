//! Error types for the call boundary
//!
//! The index computations themselves are total: every input, however
//! degenerate, has a defined numeric output. Errors only arise at the call
//! boundary, when building a fixed-length series from a runtime buffer or
//! parsing a scale selector from text.

use thiserror::Error;

/// Result type alias for boundary operations
pub type Result<T> = std::result::Result<T, AqiError>;

/// Errors that can occur while preparing inputs for an index computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AqiError {
    /// Sample buffer does not hold exactly one day of hourly samples
    #[error("Invalid history length: {0}")]
    InvalidLength(String),

    /// Scale selector text does not name a supported scale
    #[error("Unknown scale: {0}")]
    UnknownScale(String),
}

impl AqiError {
    /// Create a new `InvalidLength` error
    #[must_use]
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength(format!("Expected {expected} samples, got {actual}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AqiError::invalid_length(24, 20);
        assert_eq!(
            err.to_string(),
            "Invalid history length: Expected 24 samples, got 20"
        );

        let err = AqiError::UnknownScale("mars".to_string());
        assert_eq!(err.to_string(), "Unknown scale: mars");
    }

    #[test]
    fn test_error_equality() {
        let err1 = AqiError::UnknownScale("x".to_string());
        let err2 = AqiError::UnknownScale("x".to_string());
        let err3 = AqiError::UnknownScale("y".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
