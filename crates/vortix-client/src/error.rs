//! Error types for the authenticated request client

/// Errors surfaced by the request client.
///
/// `SessionExpired` is terminal for the current session: the credential
/// store has already been cleared and the session observer notified by the
/// time a caller sees it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("no stored credentials for an authenticated endpoint")]
    NoCredentials,

    #[error("session expired: {0}")]
    SessionExpired(String),

    #[error("credential store error: {0}")]
    Store(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
