//! Tool-specific error types.

use thiserror::Error;

use super::validation::ValidationError;
use crate::domains::freepik::ApiError;

/// A call named a tool that is not registered.
///
/// This is a dispatch fault and surfaces as a protocol error rather than a
/// tool result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

/// Errors that can occur while running a registered tool.
///
/// Every variant is reported back to the caller as an error-flagged result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] ValidationError),

    /// The remote call failed.
    #[error("Freepik API error: {0}")]
    Api(#[from] ApiError),

    /// The result could not be serialized.
    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}
