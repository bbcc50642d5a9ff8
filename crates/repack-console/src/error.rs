//! CLI error types with miette diagnostics.
//!
//! Maps `repack_api::Error` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use repack_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the backend at {url}")]
    #[diagnostic(
        code(repack::connection_failed),
        help(
            "Check that the backend is running and reachable.\n\
             Override the address with --base-url or VITE_API_TARGET.\n\
             Try: repack config show"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out after {timeout_ms}ms")]
    #[diagnostic(
        code(repack::timeout),
        help("The backend accepted the connection but did not answer in time.")
    )]
    Timeout { timeout_ms: u64 },

    // ── Navigation ───────────────────────────────────────────────────

    #[error("No console page at '{path}'")]
    #[diagnostic(
        code(repack::route_not_found),
        help("Available paths: {available}\nRun: repack routes")
    )]
    RouteNotFound { path: String, available: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(repack::not_found),
        help("Run: repack {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Backend ──────────────────────────────────────────────────────

    #[error("Backend rejected the request (HTTP {status}): {message}")]
    #[diagnostic(code(repack::backend))]
    Backend { status: u16, message: String },

    #[error("Unexpected response from the backend: {message}")]
    #[diagnostic(
        code(repack::unexpected_response),
        help("Is --base-url pointing at the API prefix rather than the web UI?")
    )]
    UnexpectedResponse { message: String },

    #[error("HTTP client error: {message}")]
    #[diagnostic(code(repack::http_client))]
    HttpClient { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(repack::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration error: {source}")]
    #[diagnostic(
        code(repack::config),
        help("Config file: {path}\nEnvironment: VITE_API_BASE_URL, VITE_API_TARGET")
    )]
    Config {
        #[source]
        source: ConfigError,
        path: String,
    },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(repack::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. }
            | Self::RouteNotFound { .. }
            | Self::Backend { status: 404, .. } => exit_code::NOT_FOUND,
            Self::Backend { status: 409, .. } => exit_code::CONFLICT,
            Self::Validation { .. } | Self::Json(_) | Self::Config { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library error mapping ────────────────────────────────────────────

impl From<repack_api::Error> for CliError {
    fn from(err: repack_api::Error) -> Self {
        use repack_api::Error as ApiError;

        let message = err.server_message();
        match err {
            ApiError::Transport(e) if e.is_connect() || e.is_request() => Self::ConnectionFailed {
                url: e
                    .url()
                    .map_or_else(|| "(unknown)".into(), ToString::to_string),
                source: Box::new(e),
            },
            // Reached the backend but the exchange broke (body read, decode).
            ApiError::Transport(e) => Self::HttpClient {
                message: e.to_string(),
            },
            ApiError::Timeout { timeout_ms } => Self::Timeout { timeout_ms },
            ApiError::Status { status, body } => Self::Backend {
                status,
                message: message.unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        "(empty body)".into()
                    } else {
                        body
                    }
                }),
            },
            ApiError::Deserialization { message, .. } => Self::UnexpectedResponse { message },
            ApiError::InvalidUrl(e) => Self::Validation {
                field: "base-url".into(),
                reason: e.to_string(),
            },
            ApiError::InvalidPathSegment(segment) => Self::Validation {
                field: "identifier".into(),
                reason: format!("{segment:?} cannot be used as a path segment"),
            },
            ApiError::Client(message) => Self::HttpClient { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            path: repack_config::config_path().display().to_string(),
        }
    }
}
