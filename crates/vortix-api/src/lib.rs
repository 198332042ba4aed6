//! Typed wrappers over the VortixPR backend endpoints
//!
//! Thin functions per endpoint family, all riding on
//! [`vortix_client::ApiClient`] so every authenticated call gets the
//! refresh-and-retry behavior for free. Response models mirror the
//! backend's schemas; non-2xx responses surface the backend's `detail`
//! message as [`Error::Api`].

pub mod blog;
pub mod contact;
pub mod content;
pub mod error;
pub mod media;
pub mod pricing;
mod response;
pub mod types;
pub mod users;

pub use error::{Error, Result};
