use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the API client.
///
/// HTTP failures carry the status and the server's human-readable message so
/// the UI can show it inline; the raw body is kept for diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the bearer token. The client has already purged
    /// the stored token and fired the unauthorized hook by the time this
    /// reaches the caller.
    #[error("Unauthorized - please sign in again")]
    Unauthorized,

    /// Any non-2xx response other than 401.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// A referenced resource is not present client-side (e.g. toggling a
    /// task id that is missing from the fetched list).
    #[error("Task not found: {id}")]
    NotFound { id: String },

    /// Transport-level failure (DNS, connection, body read).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response whose body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
