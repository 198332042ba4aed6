//! User and invitation administration
//!
//! Role and lifecycle changes ride on query parameters rather than bodies,
//! matching the backend's handlers. The backend enforces the permission
//! rules (who may grant admin, self-deactivation guard); this layer only
//! shapes the calls.

use reqwest::Method;
use reqwest::header::HeaderMap;
use vortix_auth::UserRole;
use vortix_client::{ApiClient, RequestBody};

use crate::error::Result;
use crate::response::{json, unit, url_with_params};
use crate::types::{AdminUser, Invitation, InvitationStatus, UserStats};

/// Filters for the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// `active` or `inactive`.
    pub status: Option<String>,
    pub role: Option<UserRole>,
    /// Matches against email and name.
    pub search: Option<String>,
    pub limit: Option<u32>,
}

pub async fn list_users(client: &ApiClient, query: &UserQuery) -> Result<Vec<AdminUser>> {
    let url = url_with_params(
        &client.config().admin_url("users/"),
        &[
            ("status", query.status.clone()),
            ("role", query.role.map(|r| r.as_str().to_owned())),
            ("search", query.search.clone()),
            ("limit", query.limit.map(|l| l.to_string())),
        ],
    )?;
    json(client.get(url).await?).await
}

pub async fn user_stats(client: &ApiClient) -> Result<UserStats> {
    json(client.get(client.config().admin_url("users/stats")).await?).await
}

pub async fn set_role(client: &ApiClient, user_id: i64, role: UserRole) -> Result<()> {
    let url = url_with_params(
        &client.config().admin_url(&format!("users/{user_id}/role")),
        &[("role", Some(role.as_str().to_owned()))],
    )?;
    unit(
        client
            .request(Method::PATCH, url, RequestBody::Empty, HeaderMap::new())
            .await?,
    )
    .await
}

/// Reactivate a deactivated or suspended account.
pub async fn activate(client: &ApiClient, user_id: i64) -> Result<()> {
    let url = url_with_params(
        &client.config().admin_url(&format!("users/{user_id}/activate")),
        &[],
    )?;
    unit(
        client
            .request(Method::PATCH, url, RequestBody::Empty, HeaderMap::new())
            .await?,
    )
    .await
}

pub async fn ban(client: &ApiClient, user_id: i64, reason: &str) -> Result<()> {
    let url = url_with_params(
        &client.config().admin_url(&format!("users/{user_id}/ban")),
        &[("reason", Some(reason.to_owned()))],
    )?;
    unit(
        client
            .request(Method::POST, url, RequestBody::Empty, HeaderMap::new())
            .await?,
    )
    .await
}

pub async fn unban(client: &ApiClient, user_id: i64) -> Result<()> {
    let url = client
        .config()
        .admin_url(&format!("users/{user_id}/unban"));
    unit(client.delete(url).await?).await
}

pub async fn delete_user(client: &ApiClient, user_id: i64) -> Result<()> {
    let url = client.config().admin_url(&format!("users/{user_id}"));
    unit(client.delete(url).await?).await
}

pub async fn list_invitations(
    client: &ApiClient,
    status: InvitationStatus,
) -> Result<Vec<Invitation>> {
    let status = match status {
        InvitationStatus::Pending => "pending",
        InvitationStatus::Accepted => "accepted",
        InvitationStatus::Expired => "expired",
        InvitationStatus::Cancelled => "cancelled",
    };
    let url = url_with_params(
        &client.config().admin_url("invitations/"),
        &[("status", Some(status.to_owned()))],
    )?;
    json(client.get(url).await?).await
}

pub async fn create_invitation(
    client: &ApiClient,
    email: &str,
    role: UserRole,
) -> Result<Invitation> {
    let body = serde_json::json!({ "email": email, "role": role.as_str() });
    json(
        client
            .post(client.config().admin_url("invitations/"), body)
            .await?,
    )
    .await
}

pub async fn delete_invitation(client: &ApiClient, invitation_id: i64) -> Result<()> {
    let url = client
        .config()
        .admin_url(&format!("invitations/{invitation_id}"));
    unit(client.delete(url).await?).await
}

/// Re-send the invitation email and extend its expiry.
pub async fn resend_invitation(client: &ApiClient, invitation_id: i64) -> Result<()> {
    let url = client
        .config()
        .admin_url(&format!("invitations/{invitation_id}/resend"));
    unit(
        client
            .post(
                url,
                serde_json::Value::Object(serde_json::Map::new()),
            )
            .await?,
    )
    .await
}
