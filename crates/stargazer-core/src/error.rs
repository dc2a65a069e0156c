//! Error types for the Stargazer application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Stargazer crates.
///
/// Typed, structured variants with automatic conversion from the
/// common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum StargazerError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error (missing credential, unreadable config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StargazerError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for StargazerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, StargazerError>`.
pub type Result<T> = std::result::Result<T, StargazerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: StargazerError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "secret.json").into();
        assert!(matches!(err, StargazerError::Io { .. }));
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_config_helper() {
        let err = StargazerError::config("missing api key");
        assert!(err.is_config());
        assert_eq!(err.to_string(), "Configuration error: missing api key");
    }
}
