//! Resolve configuration for the current invocation.
//!
//! Layers the `--base-url` flag over whatever `repack_config` loaded from
//! the config file and the `VITE_*` environment.

use repack_api::ApiClient;
use repack_config::Config;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Loaded settings with command-line overrides applied.
pub fn resolve(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = repack_config::load_config()?;
    if let Some(ref base) = global.base_url {
        cfg.api_base_url = Some(base.clone());
    }
    Ok(cfg)
}

/// Build the backend client for commands that talk to the API.
pub fn client(global: &GlobalOpts) -> Result<ApiClient, CliError> {
    let api_config = resolve(global)?.api_config()?;
    tracing::debug!(base_url = %api_config.base_url(), "backend");
    Ok(ApiClient::new(api_config)?)
}
