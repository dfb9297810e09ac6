//! HTTP transport settings shared by the network adapters.

use std::time::Duration;

use lectern_foundation::{Error, ProviderId, Result};

/// Default per-call timeout for provider requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Base URLs, timeout and user agent for provider calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportConfig {
    /// Base URL of the public JSON endpoint.
    pub public_endpoint_url: String,
    /// Base URL of the keyed JSON API.
    pub keyed_api_url: String,
    /// Base URL of the passage pages scraped for HTML.
    pub scrape_url: String,
    /// Timeout applied to each individual call.
    pub timeout: Duration,
    /// User agent sent with every call.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            public_endpoint_url: "https://bible-api.com".to_string(),
            keyed_api_url: "https://api.scripture.api.bible".to_string(),
            scrape_url: "https://www.biblegateway.com".to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("lectern/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TransportConfig {
    /// Points every provider at one base URL (used against a local test server).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.public_endpoint_url.clone_from(&url);
        self.keyed_api_url.clone_from(&url);
        self.scrape_url = url;
        self
    }

    /// Builder method to set the public endpoint URL.
    #[must_use]
    pub fn with_public_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.public_endpoint_url = url.into();
        self
    }

    /// Builder method to set the keyed API URL.
    #[must_use]
    pub fn with_keyed_api_url(mut self, url: impl Into<String>) -> Self {
        self.keyed_api_url = url.into();
        self
    }

    /// Builder method to set the scrape URL.
    #[must_use]
    pub fn with_scrape_url(mut self, url: impl Into<String>) -> Self {
        self.scrape_url = url.into();
        self
    }

    /// Builder method to set the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder method to set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Builds the HTTP client shared by all adapters of one engine.
///
/// # Errors
///
/// Returns an internal error if the TLS backend cannot be initialized.
pub fn build_client(config: &TransportConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| Error::internal(format!("HTTP client init failed: {e}")))
}

/// Joins a base URL and a path without doubling the slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Short descriptions of transport failures for outcome reasons and logs.
pub(crate) trait TransportErrorExt {
    fn into_provider_error(self, provider: ProviderId) -> Error;
}

impl TransportErrorExt for reqwest::Error {
    fn into_provider_error(self, provider: ProviderId) -> Error {
        let reason = if self.is_timeout() {
            "request timed out".to_string()
        } else if self.is_connect() {
            "connection failed".to_string()
        } else if self.is_decode() {
            "unexpected response format".to_string()
        } else if let Some(status) = self.status() {
            format!("HTTP status {}", status.as_u16())
        } else {
            format!("network error: {self}")
        };
        Error::provider_unavailable(provider, reason)
    }
}
