//! Custom error types for circulate
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for circulate operations
#[derive(Error, Debug)]
pub enum CirculateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed ledger content, pinned to a 1-based line number
    #[error("Ledger error at line {line}: {message}")]
    Ledger { line: usize, message: String },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CirculateError {
    /// Create a "not found" error for clients
    pub fn client_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Client",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for clients
    pub fn duplicate_client(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Client",
            identifier: identifier.into(),
        }
    }

    /// Create a ledger error at the given 1-based line number
    pub fn ledger(line: usize, message: impl Into<String>) -> Self {
        Self::Ledger {
            line,
            message: message.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CirculateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CirculateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for circulate operations
pub type CirculateResult<T> = Result<T, CirculateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CirculateError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CirculateError::client_not_found("Ann");
        assert_eq!(err.to_string(), "Client not found: Ann");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_ledger_error_carries_line() {
        let err = CirculateError::ledger(7, "expected closing brace");
        assert_eq!(
            err.to_string(),
            "Ledger error at line 7: expected closing brace"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let circulate_err: CirculateError = io_err.into();
        assert!(matches!(circulate_err, CirculateError::Io(_)));
    }
}
