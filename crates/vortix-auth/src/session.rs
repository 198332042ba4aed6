//! Session endpoint calls
//!
//! Login, registration, token refresh, and profile fetch against the
//! backend's `/auth/*` endpoints. Refresh is the only call the request
//! client issues on its own; the others are host-driven.
//!
//! A 401/403 from any of these means the presented credential is rejected,
//! which is a different failure from the endpoint being unreachable. The
//! request client uses that distinction to decide whether a session is dead.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::{TokenResponse, User};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Payload for registering a new account.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Exchange email and password for a credential pair.
pub async fn login(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<TokenResponse> {
    let response = client
        .post(format!("{base_url}/auth/login"))
        .json(&LoginRequest { email, password })
        .send()
        .await
        .map_err(|e| Error::Http(format!("login request failed: {e}")))?;

    read_token_response(response, "login").await
}

/// Register a new account, optionally against an admin invitation.
///
/// With an invitation token the backend assigns the role the invitation
/// carries; without one the account starts as a plain user.
pub async fn register(
    client: &reqwest::Client,
    base_url: &str,
    request: &RegisterRequest,
    invitation_token: Option<&str>,
) -> Result<TokenResponse> {
    let url = match invitation_token {
        Some(token) => format!("{base_url}/auth/register?invitation_token={token}"),
        None => format!("{base_url}/auth/register"),
    };

    let response = client
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(|e| Error::Http(format!("register request failed: {e}")))?;

    read_token_response(response, "register").await
}

/// Exchange the refresh token for a new credential pair.
///
/// Called by the request client when an access token is rejected. The
/// returned pair may rotate the refresh token, so the whole response must
/// be persisted. 401/403 means the refresh token itself is rejected and
/// the session cannot be recovered.
pub async fn refresh_session(
    client: &reqwest::Client,
    base_url: &str,
    refresh_token: &str,
) -> Result<TokenResponse> {
    let response = client
        .post(format!("{base_url}/auth/refresh"))
        .json(&RefreshRequest { refresh_token })
        .send()
        .await
        .map_err(|e| Error::Http(format!("refresh request failed: {e}")))?;

    read_token_response(response, "refresh").await
}

/// Fetch the profile behind an access token.
pub async fn current_user(
    client: &reqwest::Client,
    base_url: &str,
    access_token: &str,
) -> Result<User> {
    let response = client
        .get(format!("{base_url}/auth/me"))
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| Error::Http(format!("profile request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(Error::InvalidCredentials(format!(
                "profile request rejected ({status}): {body}"
            )));
        }
        return Err(Error::Session(format!(
            "profile request returned {status}: {body}"
        )));
    }

    response
        .json::<User>()
        .await
        .map_err(|e| Error::Session(format!("invalid profile response: {e}")))
}

/// Triage a token-endpoint response into a `TokenResponse` or an error.
async fn read_token_response(
    response: reqwest::Response,
    operation: &str,
) -> Result<TokenResponse> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));

        // 401/403 means the presented credential is rejected
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(Error::InvalidCredentials(format!(
                "{operation} rejected ({status}): {body}"
            )));
        }

        return Err(Error::Session(format!(
            "{operation} returned {status}: {body}"
        )));
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| Error::Session(format!("invalid {operation} response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn token_body(access: &str, refresh: &str) -> String {
        serde_json::json!({
            "access_token": access,
            "refresh_token": refresh,
            "token_type": "bearer",
            "user": {
                "id": 1,
                "email": "admin@vortixpr.com",
                "name": "Admin",
                "avatar_url": null,
                "role": "admin",
                "is_verified": true,
                "created_at": "2025-01-01T00:00:00Z"
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn login_sends_credentials_and_parses_pair() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login")
            .match_body(Matcher::Json(serde_json::json!({
                "email": "admin@vortixpr.com",
                "password": "hunter2"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(token_body("at_1", "rt_1"))
            .expect(1)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let tokens = login(&client, &server.url(), "admin@vortixpr.com", "hunter2")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(tokens.access_token, "at_1");
        assert_eq!(tokens.refresh_token, "rt_1");
        assert_eq!(tokens.user.email, "admin@vortixpr.com");
    }

    #[tokio::test]
    async fn login_rejection_is_invalid_credentials() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_body(r#"{"detail":"Incorrect email or password"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = login(&client, &server.url(), "admin@vortixpr.com", "wrong")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidCredentials(_)), "got: {err}");
    }

    #[tokio::test]
    async fn refresh_posts_refresh_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/refresh")
            .match_body(Matcher::Json(
                serde_json::json!({"refresh_token": "rt_old"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(token_body("at_new", "rt_new"))
            .expect(1)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let tokens = refresh_session(&client, &server.url(), "rt_old")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(tokens.access_token, "at_new");
        assert_eq!(tokens.refresh_token, "rt_new");
    }

    #[tokio::test]
    async fn refresh_rejection_is_invalid_credentials() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/refresh")
            .with_status(401)
            .with_body(r#"{"detail":"Invalid refresh token"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = refresh_session(&client, &server.url(), "rt_revoked")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidCredentials(_)), "got: {err}");
    }

    #[tokio::test]
    async fn refresh_server_error_is_session_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/refresh")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = refresh_session(&client, &server.url(), "rt_x")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Session(_)), "got: {err}");
    }

    #[tokio::test]
    async fn current_user_sends_bearer_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/me")
            .match_header("authorization", "Bearer at_valid")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "id": 3,
                    "email": "editor@vortixpr.com",
                    "name": "Editor",
                    "avatar_url": "https://cdn.vortixpr.com/avatars/3.png",
                    "role": "publisher",
                    "is_verified": true,
                    "created_at": "2025-02-02T00:00:00Z"
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let user = current_user(&client, &server.url(), "at_valid")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(user.id, 3);
        assert_eq!(user.role, crate::types::UserRole::Publisher);
    }

    #[tokio::test]
    async fn register_appends_invitation_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/register")
            .match_query(Matcher::UrlEncoded(
                "invitation_token".into(),
                "inv_123".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(token_body("at_r", "rt_r"))
            .expect(1)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let request = RegisterRequest {
            email: "new@vortixpr.com".into(),
            password: "pw".into(),
            name: "New".into(),
        };
        let tokens = register(&client, &server.url(), &request, Some("inv_123"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(tokens.access_token, "at_r");
    }
}
