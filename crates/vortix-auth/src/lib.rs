//! VortixPR session and credential management
//!
//! Provides the wire types for the backend's `/auth/*` endpoints, the calls
//! against them, and storage for the resulting credential pair. This crate is
//! a standalone library with no dependency on the request client and can be
//! tested and used independently.
//!
//! Credential flow:
//! 1. Host calls `session::login()` (or `register()`) → `TokenResponse`
//! 2. Pair persisted via `CredentialStore::set()`
//! 3. The request client reads the pair before every call
//! 4. On a rejected access token, the client calls `session::refresh_session()`
//!    and `set()`s the rotated pair
//! 5. A rejected refresh token means the session is dead:
//!    `CredentialStore::clear()` plus the host's logout hook

pub mod error;
pub mod session;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use session::{RegisterRequest, current_user, login, refresh_session, register};
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use types::{Credential, TokenResponse, User, UserRole};
