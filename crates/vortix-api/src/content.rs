//! Site content endpoints
//!
//! FAQs, testimonials, site settings, and carousel logos. Public reads
//! return only active rows; the admin listings return everything.

use serde::Serialize;
use vortix_client::ApiClient;

use crate::error::{Error, Result};
use crate::response::{json, unit};
use crate::types::{CarouselLogo, Faq, SiteSettings, Testimonial};

#[derive(Debug, Clone, Serialize)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTestimonial {
    pub quote: String,
    pub author_name: String,
    pub author_title: Option<String>,
    pub author_company: Option<String>,
    pub author_avatar_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCarouselLogo {
    pub name: String,
    pub logo_url: String,
    pub alt_text: Option<String>,
    pub website_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

pub async fn list_faqs(client: &ApiClient) -> Result<Vec<Faq>> {
    json(client.get(client.config().public_url("content/faqs")).await?).await
}

pub async fn list_all_faqs(client: &ApiClient) -> Result<Vec<Faq>> {
    json(client.get(client.config().admin_url("content/faqs")).await?).await
}

pub async fn create_faq(client: &ApiClient, faq: &NewFaq) -> Result<Faq> {
    let body = serde_json::to_value(faq).map_err(|e| Error::Decode(e.to_string()))?;
    json(client.post(client.config().admin_url("content/faqs"), body).await?).await
}

pub async fn update_faq(client: &ApiClient, id: i64, changes: serde_json::Value) -> Result<Faq> {
    let url = client.config().admin_url(&format!("content/faqs/{id}"));
    json(client.put(url, changes).await?).await
}

pub async fn delete_faq(client: &ApiClient, id: i64) -> Result<()> {
    let url = client.config().admin_url(&format!("content/faqs/{id}"));
    unit(client.delete(url).await?).await
}

pub async fn list_testimonials(client: &ApiClient) -> Result<Vec<Testimonial>> {
    json(client.get(client.config().public_url("content/testimonials")).await?).await
}

pub async fn list_all_testimonials(client: &ApiClient) -> Result<Vec<Testimonial>> {
    json(client.get(client.config().admin_url("content/testimonials")).await?).await
}

pub async fn create_testimonial(
    client: &ApiClient,
    testimonial: &NewTestimonial,
) -> Result<Testimonial> {
    let body = serde_json::to_value(testimonial).map_err(|e| Error::Decode(e.to_string()))?;
    json(
        client
            .post(client.config().admin_url("content/testimonials"), body)
            .await?,
    )
    .await
}

pub async fn update_testimonial(
    client: &ApiClient,
    id: i64,
    changes: serde_json::Value,
) -> Result<Testimonial> {
    let url = client.config().admin_url(&format!("content/testimonials/{id}"));
    json(client.put(url, changes).await?).await
}

pub async fn delete_testimonial(client: &ApiClient, id: i64) -> Result<()> {
    let url = client.config().admin_url(&format!("content/testimonials/{id}"));
    unit(client.delete(url).await?).await
}

pub async fn site_settings(client: &ApiClient) -> Result<SiteSettings> {
    json(client.get(client.config().public_url("content/settings")).await?).await
}

/// Update a single setting key. Settings are flat key/value pairs, so
/// updates go one key at a time.
pub async fn update_setting(client: &ApiClient, key: &str, value: &str) -> Result<()> {
    let url = client.config().admin_url(&format!("content/settings/{key}"));
    unit(
        client
            .patch(url, serde_json::json!({ "value": value }))
            .await?,
    )
    .await
}

pub async fn list_carousel_logos(client: &ApiClient) -> Result<Vec<CarouselLogo>> {
    json(
        client
            .get(client.config().public_url("content/carousel-logos"))
            .await?,
    )
    .await
}

pub async fn create_carousel_logo(
    client: &ApiClient,
    logo: &NewCarouselLogo,
) -> Result<CarouselLogo> {
    let body = serde_json::to_value(logo).map_err(|e| Error::Decode(e.to_string()))?;
    json(
        client
            .post(client.config().admin_url("content/carousel-logos"), body)
            .await?,
    )
    .await
}

pub async fn update_carousel_logo(
    client: &ApiClient,
    id: i64,
    changes: serde_json::Value,
) -> Result<CarouselLogo> {
    let url = client.config().admin_url(&format!("content/carousel-logos/{id}"));
    json(client.put(url, changes).await?).await
}

pub async fn delete_carousel_logo(client: &ApiClient, id: i64) -> Result<()> {
    let url = client.config().admin_url(&format!("content/carousel-logos/{id}"));
    unit(client.delete(url).await?).await
}
