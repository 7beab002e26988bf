//! Error types for the widget and its backend client.

use thiserror::Error;

/// Failure while exchanging a query with the backend.
///
/// The widget does not distinguish between these when rendering: every
/// variant ends up as the same connection-error agent message. The variants
/// exist for logging.
#[derive(Error, Debug)]
pub enum BackendError {
    /// HTTP transport failed (connect, DNS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint host/port did not form a valid URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The pending query was dropped before it settled.
    #[error("Query cancelled before a response arrived")]
    Cancelled,
}

/// Crate-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure (binding the listener, serving).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend exchange failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
