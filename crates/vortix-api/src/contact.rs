//! Visitor-facing write endpoints
//!
//! Contact form submission and newsletter signup. These live under
//! `/write/*` and accept anonymous requests; the backend does its own rate
//! limiting and validation.

use serde::Deserialize;
use vortix_client::ApiClient;

use crate::error::{Error, Result};
use crate::response::{json, unit};
use crate::types::ContactForm;

#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeResponse {
    pub message: String,
}

pub async fn submit_contact(client: &ApiClient, form: &ContactForm) -> Result<()> {
    let body = serde_json::to_value(form).map_err(|e| Error::Decode(e.to_string()))?;
    unit(
        client
            .post(client.config().write_url("contact/submit"), body)
            .await?,
    )
    .await
}

pub async fn subscribe_newsletter(
    client: &ApiClient,
    email: &str,
    source: Option<&str>,
) -> Result<SubscribeResponse> {
    let body = serde_json::json!({ "email": email, "source": source });
    json(
        client
            .post(client.config().write_url("newsletter/subscribe"), body)
            .await?,
    )
    .await
}
