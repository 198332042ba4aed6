//! Common types for the VortixPR client workspace

mod error;
mod secret;

pub use error::{Error, Result};
pub use secret::Secret;
