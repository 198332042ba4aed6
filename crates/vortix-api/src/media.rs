//! Media library endpoints
//!
//! All media operations are admin-only. Uploads are multipart; the size cap
//! mirrors the backend's limit so an oversized file fails before any bytes
//! leave the process.

use tracing::debug;
use vortix_client::{ApiClient, MultipartForm};

use crate::error::{Error, Result};
use crate::response::{json, unit, url_with_params};
use crate::types::{MediaFile, MediaFolder, MediaStats};

/// Upload cap enforced by the backend.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A file to upload, with its library metadata.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// Target folder; the backend defaults to `uploads`.
    pub folder: Option<String>,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
}

pub async fn list_files(
    client: &ApiClient,
    folder: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<MediaFile>> {
    let url = url_with_params(
        &client.config().admin_url("media/files"),
        &[
            ("folder", folder.map(str::to_owned)),
            ("limit", limit.map(|l| l.to_string())),
        ],
    )?;
    json(client.get(url).await?).await
}

pub async fn list_folders(client: &ApiClient) -> Result<Vec<MediaFolder>> {
    json(client.get(client.config().admin_url("media/folders")).await?).await
}

pub async fn stats(client: &ApiClient) -> Result<MediaStats> {
    json(client.get(client.config().admin_url("media/stats")).await?).await
}

/// Upload a file to the media library.
///
/// Fails with [`Error::FileTooLarge`] before dispatch when the payload
/// exceeds [`MAX_UPLOAD_BYTES`].
pub async fn upload(client: &ApiClient, upload: MediaUpload) -> Result<MediaFile> {
    let filename = upload.filename.clone();

    let mut form = MultipartForm::new().file(
        "file",
        upload.filename,
        upload.mime_type,
        upload.bytes,
    );
    if let Some(folder) = upload.folder {
        form = form.text("folder", folder);
    }
    if let Some(alt_text) = upload.alt_text {
        form = form.text("alt_text", alt_text);
    }
    if let Some(caption) = upload.caption {
        form = form.text("caption", caption);
    }

    let size = form.file_bytes();
    if size > MAX_UPLOAD_BYTES {
        return Err(Error::FileTooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    debug!(filename = %filename, size, "uploading media file");

    json(
        client
            .post_multipart(client.config().admin_url("media/upload"), form)
            .await?,
    )
    .await
}

/// Update a file's descriptive metadata.
pub async fn update_file(
    client: &ApiClient,
    id: i64,
    alt_text: Option<&str>,
    caption: Option<&str>,
) -> Result<MediaFile> {
    let url = client.config().admin_url(&format!("media/files/{id}"));
    let body = serde_json::json!({ "alt_text": alt_text, "caption": caption });
    json(client.put(url, body).await?).await
}

pub async fn delete_file(client: &ApiClient, id: i64) -> Result<()> {
    let url = client.config().admin_url(&format!("media/files/{id}"));
    unit(client.delete(url).await?).await
}
