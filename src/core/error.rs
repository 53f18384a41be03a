//! Error types and handling for the MCP server.
//!
//! Startup failures only: configuration problems and a Freepik client that
//! cannot be built. Runtime tool failures never reach this type; they are
//! reported inside tool results.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the Freepik API client.
    #[error("Freepik API error: {0}")]
    Api(#[from] crate::domains::freepik::ApiError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::freepik::ApiError;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::config("missing key").to_string(),
            "Configuration error: missing key"
        );
        let api: Error = ApiError::InvalidApiKey.into();
        assert!(api.to_string().starts_with("Freepik API error: "));
    }
}
