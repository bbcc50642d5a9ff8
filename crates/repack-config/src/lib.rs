//! Startup configuration for the repack console.
//!
//! Layers defaults, an optional TOML file and `VITE_*` environment
//! variables, then resolves them into the [`ApiConfig`] handed to the
//! client. Loaded once at start; nothing here is mutated afterwards.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use repack_api::{ApiConfig, DEFAULT_BASE_PATH};

/// Backend origin the development proxy forwards `/api` to.
pub const DEFAULT_API_TARGET: &str = "http://localhost:8080";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("invalid URL in {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config struct ───────────────────────────────────────────────────

/// Raw settings before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Overrides the `/api` base. Absolute URLs are used as-is; relative
    /// paths are resolved against `api_target`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// Backend origin (`VITE_API_TARGET`).
    #[serde(default = "default_api_target")]
    pub api_target: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            api_target: default_api_target(),
        }
    }
}

fn default_api_target() -> String {
    DEFAULT_API_TARGET.into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "repack", "repack").map_or_else(
        || PathBuf::from(".repack").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Provider stack: defaults, then `path` if it exists, then `VITE_*` env.
pub fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("VITE_").only(&["api_base_url", "api_target"]))
}

/// Load from the canonical config path and the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = figment_for(path).extract()?;
    debug!(?config, path = %path.display(), "loaded config");
    Ok(config)
}

// ── Resolution ──────────────────────────────────────────────────────

impl Config {
    /// The base override, treating an empty value as unset.
    fn base_override(&self) -> Option<&str> {
        self.api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Absolute base URL every operation is prefixed with.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = self.base_override().unwrap_or(DEFAULT_BASE_PATH);

        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin = Url::parse(self.api_target.trim()).map_err(|source| {
                    ConfigError::InvalidUrl {
                        field: "api_target",
                        source,
                    }
                })?;
                check_scheme("api_target", &origin)?;
                origin.join(raw).map_err(|source| ConfigError::InvalidUrl {
                    field: "api_base_url",
                    source,
                })?
            }
            Err(source) => {
                return Err(ConfigError::InvalidUrl {
                    field: "api_base_url",
                    source,
                });
            }
        };

        check_scheme("api_base_url", &url)?;
        Ok(url)
    }

    /// Client configuration with the default 10 s timeout.
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        let url = self.base_url()?;
        ApiConfig::new(url).map_err(|e| ConfigError::Validation {
            field: "api_base_url".into(),
            reason: e.to_string(),
        })
    }
}

fn check_scheme(field: &str, url: &Url) -> Result<(), ConfigError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Validation {
            field: field.into(),
            reason: format!("unsupported scheme '{other}', expected http or https"),
        }),
    }
}
