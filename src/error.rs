//! Error types for canonicalization.

use thiserror::Error;

/// Result type for canonicalization operations.
pub type Result<T> = std::result::Result<T, CanonicalError>;

/// Errors that can occur while canonicalizing JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonicalError {
    /// Input is not syntactically valid JSON.
    #[error("Failed to parse JSON: {message} (line {line}, column {column})")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },

    /// Input nesting goes deeper than the configured maximum.
    #[error("Nesting depth exceeds maximum of {limit}")]
    DepthExceeded { limit: usize },

    /// Input is larger than the configured maximum.
    #[error("Input of {size} bytes exceeds maximum of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    /// A non-integer number does not fit a finite double. `number` is the
    /// value as the parser read it, which may differ in spelling from the
    /// input (`1e400` is reported as `1e+400`).
    #[error("Number out of range: {number}")]
    NumberOutOfRange { number: String },

    /// Configuration was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A value could not be converted into JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The output writer failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl CanonicalError {
    /// Returns true if the error was raised while reading the input,
    /// before any canonicalization took place.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            CanonicalError::Parse { .. }
                | CanonicalError::DepthExceeded { .. }
                | CanonicalError::InputTooLarge { .. }
                | CanonicalError::NumberOutOfRange { .. }
        )
    }
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::Parse {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

impl From<serde_yaml::Error> for CanonicalError {
    fn from(err: serde_yaml::Error) -> Self {
        CanonicalError::InvalidConfig(err.to_string())
    }
}

impl From<std::io::Error> for CanonicalError {
    fn from(err: std::io::Error) -> Self {
        CanonicalError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_location() {
        let err: CanonicalError = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }")
            .unwrap_err()
            .into();

        match err {
            CanonicalError::Parse { line, column, .. } => {
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_failure_classification() {
        assert!(CanonicalError::DepthExceeded { limit: 4 }.is_parse_failure());
        assert!(CanonicalError::NumberOutOfRange { number: "1e400".into() }.is_parse_failure());
        assert!(!CanonicalError::InvalidConfig("bad".into()).is_parse_failure());
        assert!(!CanonicalError::Io("closed".into()).is_parse_failure());
    }
}
