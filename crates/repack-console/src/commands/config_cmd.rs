//! Config subcommand handlers.

use serde::Serialize;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

/// Raw settings plus what they resolve to.
#[derive(Debug, Serialize)]
struct ResolvedConfig {
    config_file: String,
    api_base_url: Option<String>,
    api_target: String,
    base_url: String,
    timeout_ms: u64,
}

fn format_resolved(r: &ResolvedConfig) -> String {
    // Table output mirrors the config file, with the derived values as comments.
    #[derive(Serialize)]
    struct FileView<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        api_base_url: Option<&'a str>,
        api_target: &'a str,
    }
    let body = toml::to_string(&FileView {
        api_base_url: r.api_base_url.as_deref(),
        api_target: &r.api_target,
    })
    .unwrap_or_default();
    format!(
        "# file:     {}\n# base url: {}\n# timeout:  {}ms\n{}",
        r.config_file,
        r.base_url,
        r.timeout_ms,
        body.trim_end()
    )
}

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::resolve(global)?;
            let api = cfg.api_config()?;
            let resolved = ResolvedConfig {
                config_file: repack_config::config_path().display().to_string(),
                api_base_url: cfg.api_base_url.clone(),
                api_target: cfg.api_target.clone(),
                base_url: api.base_url().to_string(),
                timeout_ms: api.timeout_ms(),
            };
            let out = output::render_single(&global.output, &resolved, format_resolved, |r| {
                r.base_url.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            let path = repack_config::config_path();
            let out = match global.output {
                OutputFormat::Json | OutputFormat::JsonCompact => {
                    serde_json::to_string(&path.display().to_string())?
                }
                _ => path.display().to_string(),
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
