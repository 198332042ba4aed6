//! Authenticated request client
//!
//! Wraps `reqwest::Client` with the session lifecycle: every request picks
//! up the stored access token, a 401 triggers one refresh-and-retry, and a
//! failed refresh ends the session.
//!
//! Refresh is single-flight. Concurrent requests that hit 401 at the same
//! time serialize on `refresh_lock`; the first performs the refresh, the
//! rest observe the rotated pair in the store and reuse it. Only the caller
//! whose refresh actually failed clears the store and notifies the
//! observer, so logout side effects run once per session no matter how many
//! requests were in flight.
//!
//! The retried response is returned as-is. A second 401 is not retried
//! again, so a request passes through this client at most twice.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, Response, StatusCode, Url};
use tracing::{debug, info, warn};
use vortix_auth::store::CredentialStore;
use vortix_auth::types::Credential;
use vortix_auth::{MemoryCredentialStore, session};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::request::{MultipartForm, RequestBody};

/// Hook for session-ending events.
///
/// Fired exactly once when a refresh fails and the session is torn down.
/// Hosts use it to drop cached user state and route to the login screen.
pub trait SessionObserver: Send + Sync {
    fn on_session_expired(&self);
}

/// Observer that ignores session expiry. Default for tests and one-shot
/// tools that handle `SessionExpired` at the call site.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_session_expired(&self) {}
}

/// Authenticated API client.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    store: Arc<dyn CredentialStore>,
    observer: Arc<dyn SessionObserver>,
    refresh_lock: tokio::sync::Mutex<()>,
}

impl ApiClient {
    /// Build a client over an in-memory credential store with no observer.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Self::with_store(config, Arc::new(MemoryCredentialStore::new()))
    }

    pub fn with_store(config: ApiConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        Self::with_observer(config, store, Arc::new(NoopObserver))
    }

    pub fn with_observer(
        config: ApiConfig,
        store: Arc<dyn CredentialStore>,
        observer: Arc<dyn SessionObserver>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;
        Ok(Self {
            http,
            config,
            store,
            observer,
            refresh_lock: tokio::sync::Mutex::new(()),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The underlying HTTP client, for unauthenticated session calls.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Exchange email and password for a session and persist the pair.
    ///
    /// Rejected credentials surface as [`Error::Auth`]; an unreachable or
    /// failing endpoint surfaces as [`Error::Http`] so callers can retry
    /// without treating it as a bad password.
    pub async fn login(&self, email: &str, password: &str) -> Result<vortix_auth::TokenResponse> {
        let tokens = session::login(&self.http, self.config.base_url(), email, password)
            .await
            .map_err(|e| match e {
                vortix_auth::Error::InvalidCredentials(msg) => Error::Auth(msg),
                vortix_auth::Error::Http(msg) => Error::Http(msg),
                other => Error::Http(other.to_string()),
            })?;
        self.store
            .set(Credential::from(&tokens))
            .await
            .map_err(store_error)?;
        info!(email, "logged in");
        Ok(tokens)
    }

    /// End the session locally. Clears the store without calling the backend.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear().await.map_err(store_error)?;
        info!("logged out");
        Ok(())
    }

    pub async fn get(&self, url: impl reqwest::IntoUrl) -> Result<Response> {
        self.request(Method::GET, url.into_url()?, RequestBody::Empty, HeaderMap::new())
            .await
    }

    pub async fn post(&self, url: impl reqwest::IntoUrl, body: serde_json::Value) -> Result<Response> {
        self.request(Method::POST, url.into_url()?, RequestBody::Json(body), HeaderMap::new())
            .await
    }

    pub async fn put(&self, url: impl reqwest::IntoUrl, body: serde_json::Value) -> Result<Response> {
        self.request(Method::PUT, url.into_url()?, RequestBody::Json(body), HeaderMap::new())
            .await
    }

    pub async fn patch(&self, url: impl reqwest::IntoUrl, body: serde_json::Value) -> Result<Response> {
        self.request(Method::PATCH, url.into_url()?, RequestBody::Json(body), HeaderMap::new())
            .await
    }

    pub async fn delete(&self, url: impl reqwest::IntoUrl) -> Result<Response> {
        self.request(Method::DELETE, url.into_url()?, RequestBody::Empty, HeaderMap::new())
            .await
    }

    pub async fn post_multipart(
        &self,
        url: impl reqwest::IntoUrl,
        form: MultipartForm,
    ) -> Result<Response> {
        self.request(
            Method::POST,
            url.into_url()?,
            RequestBody::Multipart(form),
            HeaderMap::new(),
        )
        .await
    }

    /// Send a request with the session lifecycle applied.
    ///
    /// Attaches the stored access token when one exists; anonymous requests
    /// go out without an Authorization header so public endpoints work
    /// before login. On a 401 with a stored credential, refreshes once and
    /// retries once. Any other status is returned untouched, including
    /// errors.
    pub async fn request(
        &self,
        method: Method,
        url: Url,
        body: RequestBody,
        headers: HeaderMap,
    ) -> Result<Response> {
        let credential = self.store.get().await.map_err(store_error)?;

        let response = self
            .dispatch(&method, &url, &body, &headers, credential.as_ref())
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        // 401 without a credential cannot be recovered by a refresh
        let Some(stale) = credential else {
            return Err(Error::NoCredentials);
        };

        debug!(%method, %url, "access token rejected, refreshing");
        let fresh = self.refresh_access(&stale).await?;
        self.dispatch(&method, &url, &body, &headers, Some(&fresh))
            .await
    }

    async fn dispatch(
        &self,
        method: &Method,
        url: &Url,
        body: &RequestBody,
        headers: &HeaderMap,
        credential: Option<&Credential>,
    ) -> Result<Response> {
        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .headers(headers.clone());
        if let Some(credential) = credential {
            builder = builder.bearer_auth(credential.access_token());
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(form) => builder.multipart(form.to_form()?),
        };
        Ok(builder.send().await?)
    }

    /// Obtain a usable credential after `stale` was rejected.
    ///
    /// Serializes on the refresh lock. A waiter that finds the store already
    /// rotated past `stale` reuses the new pair without touching the
    /// backend. A waiter that finds the store empty lost to a failed
    /// refresh; it reports `SessionExpired` without re-firing the observer.
    async fn refresh_access(&self, stale: &Credential) -> Result<Credential> {
        let _guard = self.refresh_lock.lock().await;

        match self.store.get().await.map_err(store_error)? {
            Some(current) if current != *stale => {
                debug!("reusing credential rotated by a concurrent refresh");
                return Ok(current);
            }
            None => {
                return Err(Error::SessionExpired(
                    "session ended while waiting for refresh".into(),
                ));
            }
            _ => {}
        }

        match session::refresh_session(&self.http, self.config.base_url(), stale.refresh_token())
            .await
        {
            Ok(tokens) => {
                let fresh = Credential::from(&tokens);
                self.store.set(fresh.clone()).await.map_err(store_error)?;
                info!("session refreshed");
                Ok(fresh)
            }
            Err(err) => {
                // Unrecoverable: tear the session down before releasing the lock
                self.store.clear().await.map_err(store_error)?;
                self.observer.on_session_expired();
                warn!(error = %err, "refresh failed, session ended");
                Err(Error::SessionExpired(err.to_string()))
            }
        }
    }
}

fn store_error(err: vortix_auth::Error) -> Error {
    Error::Store(err.to_string())
}
