//! Blog endpoints
//!
//! Published posts are read through `/public/blog/*` (cacheable). All
//! mutation and draft access goes through `/admin/blog/*`.

use serde::Serialize;
use vortix_client::ApiClient;

use crate::error::{Error, Result};
use crate::response::{json, unit, url_with_params};
use crate::types::{BlogCategory, BlogPost, BlogPostsResponse};

/// Filters for the paginated post listing.
#[derive(Debug, Clone, Default)]
pub struct BlogQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Fields the author supplies when creating a post. The backend derives the
/// slug and timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct NewBlogPost {
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub read_time: i64,
    pub image_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub status: String,
}

pub async fn list_posts(client: &ApiClient, query: &BlogQuery) -> Result<BlogPostsResponse> {
    let url = url_with_params(
        &client.config().public_url("blog/posts"),
        &[
            ("page", query.page.map(|p| p.to_string())),
            ("page_size", query.page_size.map(|p| p.to_string())),
            ("category", query.category.clone()),
            ("search", query.search.clone()),
        ],
    )?;
    json(client.get(url).await?).await
}

pub async fn get_post(client: &ApiClient, slug: &str) -> Result<BlogPost> {
    let url = client.config().public_url(&format!("blog/posts/{slug}"));
    json(client.get(url).await?).await
}

pub async fn list_categories(client: &ApiClient) -> Result<Vec<BlogCategory>> {
    json(client.get(client.config().public_url("blog/categories")).await?).await
}

pub async fn get_post_by_id(client: &ApiClient, id: i64) -> Result<BlogPost> {
    let url = client.config().admin_url(&format!("blog/posts/by-id/{id}"));
    json(client.get(url).await?).await
}

pub async fn create_post(client: &ApiClient, post: &NewBlogPost) -> Result<BlogPost> {
    let body = serde_json::to_value(post).map_err(|e| Error::Decode(e.to_string()))?;
    json(client.post(client.config().admin_url("blog/posts"), body).await?).await
}

/// Partial update; only the fields present in `changes` are touched.
pub async fn update_post(
    client: &ApiClient,
    id: i64,
    changes: serde_json::Value,
) -> Result<BlogPost> {
    let url = client.config().admin_url(&format!("blog/posts/{id}"));
    json(client.put(url, changes).await?).await
}

pub async fn delete_post(client: &ApiClient, id: i64) -> Result<()> {
    let url = client.config().admin_url(&format!("blog/posts/{id}"));
    unit(client.delete(url).await?).await
}
