use thiserror::Error;

/// Top-level error type for the `repack-api` crate.
///
/// Every operation surfaces failures through this one type. The client
/// never retries and never interprets error payloads; the raw body of a
/// non-2xx response is carried back verbatim.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request exceeded the client-side cutoff.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An identifier would be empty or a dot segment once placed in the path.
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// The HTTP client itself could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    // ── Backend ─────────────────────────────────────────────────────
    /// Non-2xx response. `body` is exactly what the backend sent.
    #[error("Backend returned HTTP {status}")]
    Status { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

impl Error {
    /// Classify a `reqwest` failure, folding its timeout into [`Error::Timeout`].
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_ms }
        } else {
            Self::Transport(err)
        }
    }

    /// HTTP status of a non-2xx response, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, for errors that carry one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::Deserialization { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if the request hit the client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` if the request never reached the backend.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_request(),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Best-effort extraction of the backend's `{"error": "..."}` message.
    ///
    /// Display helper only. Nothing in this crate branches on it.
    pub fn server_message(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
    }
}
