//! Authenticated HTTP client for the VortixPR backend
//!
//! Sits between the typed endpoint wrappers and `reqwest`, owning the
//! session lifecycle so callers never handle tokens directly:
//!
//! - attaches the stored access token as a Bearer header
//! - on a 401, refreshes the session once and retries the request once
//! - de-duplicates concurrent refreshes into a single backend call
//! - on an unrecoverable refresh failure, clears the credential store and
//!   notifies the [`SessionObserver`] exactly once
//!
//! Request bodies are held in owned, rebuildable form so the retry can
//! reconstruct them. See [`request::MultipartForm`].

pub mod client;
pub mod config;
pub mod error;
pub mod request;

pub use client::{ApiClient, NoopObserver, SessionObserver};
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use request::{FormPart, MultipartForm, RequestBody};
