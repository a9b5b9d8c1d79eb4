//! Error types.

use thiserror::Error;

/// The main error type for rloading operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-related error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode a response body as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A required field was missing in the response.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Failed to start the blocking adapter's runtime.
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl Error {
    /// Create a missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Error::MissingField(field.into())
    }
}

/// Result type alias for rloading operations.
pub type Result<T> = std::result::Result<T, Error>;
