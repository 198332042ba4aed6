//! Error types for the endpoint wrappers

/// Errors from typed endpoint calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Client(#[from] vortix_client::Error),

    /// Non-2xx response from the backend, with the `detail` message when the
    /// body carried one.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("file is {size} bytes, upload limit is {limit}")]
    FileTooLarge { size: usize, limit: usize },

    #[error("invalid URL: {0}")]
    Url(String),
}

/// Result alias for endpoint operations.
pub type Result<T> = std::result::Result<T, Error>;
