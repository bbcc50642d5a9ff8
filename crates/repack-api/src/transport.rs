// Client configuration and reqwest::Client construction.
//
// The base address and timeout are fixed at construction time and only
// read afterwards, so the client can be cloned freely across tasks.

use std::time::Duration;

use url::Url;

use crate::error::Error;

/// Per-request cutoff applied to every operation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Base path used when no override is configured.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Configuration for [`ApiClient`](crate::ApiClient).
///
/// `base_url` must be absolute. Endpoint paths are appended to whatever
/// path it already carries, so `http://host:8080/api` yields
/// `http://host:8080/api/interfaces`.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Duration,
}

impl ApiConfig {
    /// Build a config around an absolute base URL with the default timeout.
    pub fn new(base_url: Url) -> Result<Self, Error> {
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Parse and validate a base URL string.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        Self::new(Url::parse(raw)?)
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Timeout in whole milliseconds, saturating.
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Build a `reqwest::Client` that enforces this config's timeout.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("repack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Client(e.to_string()))
    }
}
