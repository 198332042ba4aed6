//! Pricing package endpoints

use serde::Serialize;
use vortix_client::ApiClient;

use crate::error::{Error, Result};
use crate::response::{json, unit, url_with_params};
use crate::types::PricingPackage;

#[derive(Debug, Clone, Serialize)]
pub struct NewPricingPackage {
    pub name: String,
    pub description: String,
    pub price: String,
    pub currency: String,
    pub billing_period: String,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub badge_text: Option<String>,
    pub display_order: i64,
    pub status: String,
}

/// Public package listing, filtered by status (`active` by default
/// server-side).
pub async fn list_packages(
    client: &ApiClient,
    status: Option<&str>,
) -> Result<Vec<PricingPackage>> {
    let url = url_with_params(
        &client.config().public_url("pricing/packages"),
        &[("status", status.map(str::to_owned))],
    )?;
    json(client.get(url).await?).await
}

pub async fn get_package(client: &ApiClient, slug: &str) -> Result<PricingPackage> {
    let url = client.config().public_url(&format!("pricing/packages/{slug}"));
    json(client.get(url).await?).await
}

pub async fn get_package_by_id(client: &ApiClient, id: i64) -> Result<PricingPackage> {
    let url = client
        .config()
        .admin_url(&format!("pricing/packages/by-id/{id}"));
    json(client.get(url).await?).await
}

pub async fn create_package(
    client: &ApiClient,
    package: &NewPricingPackage,
) -> Result<PricingPackage> {
    let body = serde_json::to_value(package).map_err(|e| Error::Decode(e.to_string()))?;
    json(
        client
            .post(client.config().admin_url("pricing/packages"), body)
            .await?,
    )
    .await
}

pub async fn update_package(
    client: &ApiClient,
    id: i64,
    changes: serde_json::Value,
) -> Result<PricingPackage> {
    let url = client.config().admin_url(&format!("pricing/packages/{id}"));
    json(client.put(url, changes).await?).await
}

pub async fn delete_package(client: &ApiClient, id: i64) -> Result<()> {
    let url = client.config().admin_url(&format!("pricing/packages/{id}"));
    unit(client.delete(url).await?).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;
    use mockito::{Matcher, Server};

    fn package_json(id: i64, slug: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": "Starter",
            "slug": slug,
            "description": "Entry tier",
            "price": "499",
            "currency": "USD",
            "billing_period": "one_time",
            "features": ["3 placements"],
            "is_popular": false,
            "badge_text": null,
            "display_order": 1,
            "status": "active",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn list_packages_filters_by_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/public/pricing/packages")
            .match_query(Matcher::UrlEncoded("status".into(), "active".into()))
            .with_status(200)
            .with_body(format!("[{}]", package_json(1, "starter")))
            .expect(1)
            .create_async()
            .await;

        let client = testutil::anon_client(&server.url());
        let packages = list_packages(&client, Some("active")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].slug, "starter");
    }

    #[tokio::test]
    async fn get_package_by_slug() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/public/pricing/packages/starter")
            .with_status(200)
            .with_body(package_json(1, "starter").to_string())
            .create_async()
            .await;

        let client = testutil::anon_client(&server.url());
        let package = get_package(&client, "starter").await.unwrap();
        assert_eq!(package.name, "Starter");
    }

    #[tokio::test]
    async fn delete_requires_auth_path() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/admin/pricing/packages/4")
            .match_header("authorization", "Bearer at_test")
            .with_status(200)
            .with_body(r#"{"message":"deleted"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = testutil::authed_client(&server.url());
        delete_package(&client, 4).await.unwrap();
        mock.assert_async().await;
    }
}
