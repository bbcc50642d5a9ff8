//! Shared helpers for command handlers.

use std::path::Path;

use repack_api::models::ApiResponse;

use crate::error::CliError;
use crate::output;

/// Unwrap a single-resource envelope, turning a 404 or a missing `data`
/// member into a `NotFound` that points at the matching list command.
pub fn found<T>(
    result: Result<ApiResponse<T>, repack_api::Error>,
    resource_type: &str,
    identifier: impl ToString,
    list_command: &str,
) -> Result<T, CliError> {
    let not_found = || CliError::NotFound {
        resource_type: resource_type.into(),
        identifier: identifier.to_string(),
        list_command: list_command.into(),
    };
    match result {
        Ok(resp) => resp.data.ok_or_else(not_found),
        Err(e) if e.is_not_found() => Err(not_found()),
        Err(e) => Err(e.into()),
    }
}

/// Items of a list envelope. An absent `data` member is an empty list.
pub fn items<T>(resp: ApiResponse<Vec<T>>) -> Vec<T> {
    resp.data.unwrap_or_default()
}

/// Report a write acknowledgement on stderr, preferring the backend's message.
pub fn acknowledge<T>(resp: &ApiResponse<T>, fallback: &str, quiet: bool) {
    let message = resp
        .message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(fallback);
    output::notice(message, quiet);
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("invalid JSON in {}: {e}", path.display()),
    })
}

/// `yes` / `no` cell for boolean table columns.
pub fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.into()
}

/// `-` for empty strings in detail views.
pub fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
