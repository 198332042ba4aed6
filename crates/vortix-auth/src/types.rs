//! Wire types for the VortixPR auth endpoints

use common::Secret;
use serde::{Deserialize, Serialize};

/// Account role as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Publisher,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Wire name, as used in query parameters and JSON bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Publisher => "publisher",
            UserRole::Admin => "admin",
            UserRole::SuperAdmin => "super_admin",
        }
    }
}

/// Authenticated account profile, returned by `/auth/me` and embedded in
/// every token response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub is_verified: bool,
    pub created_at: String,
}

/// Response from the login, register, and refresh endpoints.
///
/// The refresh endpoint may rotate the refresh token; callers must persist
/// both tokens from this response, never just the access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: User,
}

/// The stored credential pair.
///
/// Both tokens are wrapped in [`Secret`] so Debug output and log fields
/// never leak them. The pair is mutated only by the login flow and by a
/// successful refresh, and cleared on logout or when a refresh is rejected.
/// It is always replaced as a whole, so readers never observe a
/// half-rotated pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    access: Secret<String>,
    refresh: Secret<String>,
}

impl Credential {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: Secret::new(access.into()),
            refresh: Secret::new(refresh.into()),
        }
    }

    /// Access token for the `Authorization: Bearer` header.
    pub fn access_token(&self) -> &str {
        self.access.expose()
    }

    /// Refresh token for the `/auth/refresh` exchange.
    pub fn refresh_token(&self) -> &str {
        self.refresh.expose()
    }
}

impl From<&TokenResponse> for Credential {
    fn from(tokens: &TokenResponse) -> Self {
        Self::new(tokens.access_token.clone(), tokens.refresh_token.clone())
    }
}
