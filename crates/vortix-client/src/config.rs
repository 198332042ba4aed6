//! Client configuration and endpoint addressing
//!
//! Config precedence: env vars > config file > defaults. `API_BASE_URL`
//! always wins when set, so a deployment can retarget the client without
//! touching the TOML.
//!
//! The base URL already includes the `/api` prefix. Sub-path helpers build
//! the three endpoint families the backend exposes: `/public` for anonymous
//! reads, `/write` for publisher content edits, `/admin` for admin-only
//! management.

use std::path::Path;

use serde::Deserialize;

/// Base URL and request timeout for the API client.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    base_url: String,
    #[serde(default = "default_timeout")]
    timeout_secs: u64,
}

#[derive(Deserialize)]
struct ConfigFile {
    api: ApiConfig,
}

fn default_timeout() -> u64 {
    30
}

impl ApiConfig {
    /// Build a config from an explicit base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> common::Result<Self> {
        let config = Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout(),
        };
        config.validated()
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> common::Result<Self> {
        self.timeout_secs = timeout_secs;
        self.validated()
    }

    /// Load configuration from a TOML file, then overlay environment variables.
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents)?;
        let mut config = file.api;

        if let Ok(url) = std::env::var("API_BASE_URL") {
            config.base_url = url;
        }

        config.validated()
    }

    /// Build a config from `API_BASE_URL` alone.
    ///
    /// The variable is required. There is no hardcoded fallback URL, so a
    /// misconfigured deployment fails at startup instead of talking to the
    /// wrong backend.
    pub fn from_env() -> common::Result<Self> {
        let base_url = std::env::var("API_BASE_URL")
            .map_err(|_| common::Error::Config("API_BASE_URL is not set".into()))?;
        Self::new(base_url)
    }

    fn validated(mut self) -> common::Result<Self> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(common::Error::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                self.base_url
            )));
        }
        let parsed = reqwest::Url::parse(&self.base_url).map_err(|e| {
            common::Error::Config(format!("base_url is not a valid URL ({}): {e}", self.base_url))
        })?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(common::Error::Config(format!(
                "base_url must include a host, got: {}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(common::Error::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Absolute URL for a path under the API base.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Anonymous read endpoint under `/public`.
    pub fn public_url(&self, path: &str) -> String {
        format!("{}/public/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Publisher content endpoint under `/write`.
    pub fn write_url(&self, path: &str) -> String {
        format!("{}/write/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Admin management endpoint under `/admin`.
    pub fn admin_url(&self, path: &str) -> String {
        format!("{}/admin/{}", self.base_url, path.trim_start_matches('/'))
    }
}
