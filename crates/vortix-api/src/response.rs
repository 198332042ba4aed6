//! Response decoding helpers
//!
//! The backend wraps every error in a `{"detail": ...}` envelope. These
//! helpers turn a raw `reqwest::Response` into a typed value or an
//! `Error::Api` carrying the detail message.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Decode a JSON response body, or surface the error envelope.
pub(crate) async fn json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status.as_u16(), response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

/// Check a response for success and discard the body.
pub(crate) async fn unit(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status.as_u16(), response).await);
    }
    Ok(())
}

async fn api_error(status: u16, response: reqwest::Response) -> Error {
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned))
        .unwrap_or(body);
    Error::Api { status, message }
}

/// Append query parameters to an endpoint URL, skipping `None`s.
pub(crate) fn url_with_params(
    base: &str,
    params: &[(&str, Option<String>)],
) -> Result<reqwest::Url> {
    let present: Vec<(&str, String)> = params
        .iter()
        .filter_map(|(k, v)| v.clone().map(|v| (*k, v)))
        .collect();
    if present.is_empty() {
        return reqwest::Url::parse(base).map_err(|e| Error::Url(e.to_string()));
    }
    reqwest::Url::parse_with_params(base, present).map_err(|e| Error::Url(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_with_params_skips_absent_values() {
        let url = url_with_params(
            "https://api.vortixpr.com/api/admin/users",
            &[
                ("status", Some("active".into())),
                ("role", None),
                ("search", Some("vortix".into())),
            ],
        )
        .unwrap();
        assert_eq!(url.query(), Some("status=active&search=vortix"));
    }

    #[test]
    fn url_with_params_handles_empty_list() {
        let url = url_with_params("https://api.vortixpr.com/api/admin/media/folders", &[]).unwrap();
        assert_eq!(url.query(), None);
    }
}
