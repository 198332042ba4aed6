//! Wire models for the backend's public, write, and admin endpoints
//!
//! Field names and nullability mirror the backend's response schemas.
//! Timestamps stay as RFC 3339 strings; callers that need real datetimes
//! parse at the edge.

use serde::{Deserialize, Serialize};
use vortix_auth::UserRole;

/// A blog post in any status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub read_time: i64,
    pub image_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub published_at: Option<String>,
}

/// Paginated envelope for blog post listings.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPostsResponse {
    pub posts: Vec<BlogPost>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

/// Category with its post count, from the public category listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogCategory {
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub display_order: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub quote: String,
    pub author_name: String,
    pub author_title: Option<String>,
    pub author_company: Option<String>,
    pub author_avatar_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Flattened key/value site settings, as served by the public settings
/// endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    pub site_logo_light: String,
    pub site_logo_dark: String,
    pub site_name: String,
    pub site_slogan: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub social_twitter: String,
    pub social_linkedin: String,
    pub social_facebook: String,
    pub social_instagram: String,
    pub carousel_subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselLogo {
    pub id: i64,
    pub name: String,
    pub logo_url: String,
    pub alt_text: Option<String>,
    pub website_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPackage {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: String,
    pub currency: String,
    pub billing_period: String,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub badge_text: Option<String>,
    pub display_order: i64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A file in the media library.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaFile {
    pub id: i64,
    pub filename: String,
    pub original_filename: String,
    pub file_key: String,
    pub file_url: String,
    pub file_size: i64,
    pub mime_type: String,
    pub folder: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    pub uploaded_by: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Per-folder rollup from the folder listing.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaFolder {
    pub folder: String,
    pub file_count: i64,
    pub total_size: Option<i64>,
}

/// Library-wide media statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaStats {
    pub total_files: i64,
    pub total_size: Option<i64>,
    pub folder_count: i64,
}

/// Account lifecycle state as the admin endpoints report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    UserDeactivated,
    AdminSuspended,
    Banned,
}

/// A user row from the admin user listing.
///
/// `account_status` is absent on older backend revisions; `is_active` is
/// always present.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub is_verified: bool,
    pub is_active: bool,
    #[serde(default)]
    pub account_status: Option<AccountStatus>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserStats {
    pub total_users: i64,
    pub active_users: i64,
    pub inactive_users: i64,
    pub admin_count: i64,
    pub user_count: i64,
    pub google_users: i64,
    pub email_users: i64,
    pub verified_users: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
    Cancelled,
}

/// An outstanding or resolved admin invitation.
#[derive(Debug, Clone, Deserialize)]
pub struct Invitation {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
    pub token: String,
    pub invited_by: i64,
    pub status: InvitationStatus,
    pub expires_at: String,
    pub created_at: String,
    pub accepted_at: Option<String>,
}

/// Contact form submission payload.
#[derive(Debug, Clone, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}
