//! Freepik client error types.

use thiserror::Error;

/// Result type for Freepik API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the Freepik API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or protocol failure reported by the HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Request failed with status code {status}: {body}")]
    Status { status: u16, body: String },

    /// A request or response body could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An endpoint URL could not be built.
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The configured API key cannot be sent as a header value.
    #[error("API key contains characters that are not allowed in an HTTP header")]
    InvalidApiKey,
}

impl ApiError {
    /// Create an error from a non-success HTTP response.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status of the failed response, if the remote answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
