//! Rebuildable request bodies
//!
//! A request that gets a 401 is retried after the token refresh, so its body
//! must be constructible twice. JSON values clone trivially, but a
//! `reqwest::multipart::Form` is single-use. `MultipartForm` holds the part
//! data in owned buffers and builds a fresh `Form` per dispatch.

use crate::error::{Error, Result};

/// Body attached to an API request.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

/// Owned multipart form data.
///
/// The Content-Type header with its boundary is set by the HTTP layer when
/// the form is attached; callers must not set it themselves.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

/// A single named part of a multipart form.
#[derive(Debug, Clone)]
pub struct FormPart {
    name: String,
    kind: PartKind,
}

#[derive(Debug, Clone)]
enum PartKind {
    Text(String),
    File {
        filename: String,
        mime_type: String,
        bytes: Vec<u8>,
    },
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            kind: PartKind::Text(value.into()),
        });
        self
    }

    /// Add a file field from an in-memory buffer.
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            kind: PartKind::File {
                filename: filename.into(),
                mime_type: mime_type.into(),
                bytes,
            },
        });
        self
    }

    /// Total size in bytes of all file parts.
    pub fn file_bytes(&self) -> usize {
        self.parts
            .iter()
            .map(|p| match &p.kind {
                PartKind::Text(_) => 0,
                PartKind::File { bytes, .. } => bytes.len(),
            })
            .sum()
    }

    /// Build a fresh single-use form from the owned data.
    pub fn to_form(&self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for part in &self.parts {
            form = match &part.kind {
                PartKind::Text(value) => form.text(part.name.clone(), value.clone()),
                PartKind::File {
                    filename,
                    mime_type,
                    bytes,
                } => {
                    let file_part = reqwest::multipart::Part::bytes(bytes.clone())
                        .file_name(filename.clone())
                        .mime_str(mime_type)
                        .map_err(|e| {
                            Error::InvalidRequest(format!("invalid mime type {mime_type}: {e}"))
                        })?;
                    form.part(part.name.clone(), file_part)
                }
            };
        }
        Ok(form)
    }
}
