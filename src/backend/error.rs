//! Error types for backend queries.

use thiserror::Error;

/// Errors that can occur while talking to the word backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The configured base URL cannot be used to build endpoint URLs
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Transport-level failure (connect, reset, ...)
    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("Backend returned {status} for '{endpoint}'")]
    Status { endpoint: String, status: u16 },

    /// Body was not the expected JSON shape
    #[error("Failed to decode response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The task running the query panicked or was aborted
    #[error("Query task failed: {reason}")]
    TaskFailed { reason: String },
}

impl BackendError {
    /// Short classification used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::InvalidUrl { .. } => "invalid_url",
            BackendError::ClientBuild(_) => "client_build",
            BackendError::Request { .. } => "request",
            BackendError::Status { .. } => "status",
            BackendError::Decode { .. } => "decode",
            BackendError::TaskFailed { .. } => "task_failed",
        }
    }
}
