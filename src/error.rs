//! Hipsum Error Types
//!
//! Centralized error handling for the generate flow and its hosts.

use thiserror::Error;

/// Central error type for Hipsum
#[derive(Error, Debug)]
pub enum HipsumError {
    /// The generator answered with something other than an array of strings
    #[error("Invalid response")]
    InvalidResponse,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Value must be an integer: {0:?}")]
    InvalidCount(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HipsumError {
    /// Whether the failure happened on the wire rather than in the payload
    pub fn is_transport(&self) -> bool {
        matches!(self, HipsumError::Http(_) | HipsumError::Api { .. })
    }
}

/// Result type alias for Hipsum operations
pub type HipsumResult<T> = Result<T, HipsumError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for HipsumError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        HipsumError::Lock(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_response_message() {
        assert_eq!(HipsumError::InvalidResponse.to_string(), "Invalid response");
    }

    #[test]
    fn test_transport_classification() {
        let api = HipsumError::Api {
            status: 503,
            message: "down".to_string(),
        };
        assert!(api.is_transport());
        assert!(!HipsumError::InvalidResponse.is_transport());
        assert_eq!(api.to_string(), "API error: 503 - down");
    }
}
