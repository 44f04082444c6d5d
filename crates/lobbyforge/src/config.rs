//! Client configuration: where the backend lives and how long to wait.
//!
//! The base URL is a deployment-time value. In development the app talks
//! to a local proxy under a fixed prefix instead of hitting the gateway
//! directly (avoids CORS); [`ClientConfig::with_dev_proxy`] reproduces
//! that path shape.

use std::time::Duration;

use lobbyforge_transport::DEFAULT_TIMEOUT;
use url::Url;

/// Environment variable read by [`ClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "LOBBYFORGE_API_BASE_URL";

/// Path prefix the development proxy serves the API under.
pub const DEV_PROXY_PREFIX: &str = "/api/$default";

/// Errors building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL string didn't parse.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL parsed but isn't http(s).
    #[error("base URL must be http or https, got {0}")]
    UnsupportedScheme(String),

    /// `LOBBYFORGE_API_BASE_URL` is not set.
    #[error("LOBBYFORGE_API_BASE_URL is not set")]
    MissingBaseUrl,
}

/// Deployment-time settings shared by every domain client.
///
/// Plain struct with builder-style setters; construct once at startup and
/// pass by reference into each client's `new`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
    dev_proxy: bool,
}

impl ClientConfig {
    /// Creates a config for the given absolute base URL.
    ///
    /// # Errors
    /// [`ConfigError::InvalidBaseUrl`] if the string doesn't parse,
    /// [`ConfigError::UnsupportedScheme`] for non-http(s) schemes. The
    /// scheme check matters: it guarantees the URL is hierarchical, which
    /// every path-building helper downstream relies on.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(Self {
            base_url: url,
            timeout: DEFAULT_TIMEOUT,
            dev_proxy: false,
        })
    }

    /// Reads the base URL from `LOBBYFORGE_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw =
            std::env::var(BASE_URL_ENV).map_err(|_| ConfigError::MissingBaseUrl)?;
        Self::new(&raw)
    }

    /// Overrides the per-request deadline (default 30 s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Routes requests through the development proxy prefix.
    pub fn with_dev_proxy(mut self, enabled: bool) -> Self {
        self.dev_proxy = enabled;
        self
    }

    /// The per-request deadline clients should configure their executor with.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The effective base URL, with the dev proxy prefix applied when
    /// enabled.
    pub fn api_base(&self) -> Url {
        if !self.dev_proxy {
            return self.base_url.clone();
        }
        let mut url = self.base_url.clone();
        // Invariant from `new`: http(s) URLs are hierarchical, so
        // path_segments_mut cannot fail here.
        url.path_segments_mut()
            .expect("http(s) URL is hierarchical")
            .pop_if_empty()
            .extend(DEV_PROXY_PREFIX.trim_start_matches('/').split('/'));
        url
    }
}

/// Joins path segments onto a base URL, percent-encoding each segment.
///
/// Shared by all domain clients so ids with slashes or spaces can't smuggle
/// extra path components into an endpoint.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.path_segments_mut()
        .expect("http(s) URL is hierarchical")
        .pop_if_empty()
        .extend(segments);
    url
}
