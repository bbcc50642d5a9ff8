// Backend HTTP client
//
// Wraps `reqwest::Client` with endpoint resolution and uniform response
// handling. The per-resource operations live in sibling modules as
// inherent methods so this file stays focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::transport::ApiConfig;

/// Async client for the configuration backend.
///
/// Every method issues exactly one request and hands back the decoded
/// body. Cloning is cheap and clones share a connection pool; nothing is
/// cached or sequenced between calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client whose requests are cut off after `config.timeout()`.
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        let http = config.build_client()?;
        Ok(Self { http, config })
    }

    /// Wrap an existing `reqwest::Client`. The caller owns its timeout.
    pub fn from_reqwest(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        self.config.base_url()
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Send a request without a body.
    pub(crate) async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, Error> {
        let url = endpoint.url(self.config.base_url())?;
        debug!("{} {url}", endpoint.method());

        let req = self.http.request(endpoint.method().clone(), url);
        self.send(req).await
    }

    /// Send a request with a JSON body.
    pub(crate) async fn call_with<T, B>(&self, endpoint: Endpoint, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let url = endpoint.url(self.config.base_url())?;
        debug!("{} {url}", endpoint.method());

        let req = self.http.request(endpoint.method().clone(), url).json(body);
        self.send(req).await
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T, Error> {
        let timeout_ms = self.config.timeout_ms();
        let resp = req
            .send()
            .await
            .map_err(|e| Error::from_reqwest(e, timeout_ms))?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::from_reqwest(e, self.config.timeout_ms()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}
