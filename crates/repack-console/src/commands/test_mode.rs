//! Packet dry-run handler.

use repack_api::ApiClient;
use repack_api::ids::RuleId;
use repack_api::models::{TestRequest, TestResult};

use crate::cli::{GlobalOpts, TestArgs};
use crate::error::CliError;
use crate::output;

use super::util;

/// Hex digits only, ignoring whitespace and `:` separators.
fn normalize_hex(raw: &str) -> Result<String, CliError> {
    let hex: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    if hex.is_empty() {
        return Err(CliError::Validation {
            field: "hex".into(),
            reason: "packet is empty".into(),
        });
    }
    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(CliError::Validation {
            field: "hex".into(),
            reason: format!("'{bad}' is not a hex digit"),
        });
    }
    if hex.len() % 2 != 0 {
        return Err(CliError::Validation {
            field: "hex".into(),
            reason: "odd number of hex digits".into(),
        });
    }
    Ok(hex.to_ascii_lowercase())
}

fn result_detail(r: &TestResult) -> String {
    let mut lines = vec![
        format!(
            "Flow:     {} {}:{} -> {}:{}",
            util::or_dash(&r.protocol),
            util::or_dash(&r.src_ip),
            r.src_port,
            util::or_dash(&r.dst_ip),
            r.dst_port
        ),
        format!(
            "Rule:     {}",
            r.matched_rule.as_ref().map_or_else(
                || "(no match)".into(),
                |m| format!("{} ({})", m.name, super::rules::id_of(m))
            )
        ),
    ];

    if !r.parsed_fields.is_empty() {
        lines.push("Fields:".into());
        lines.extend(r.parsed_fields.iter().map(|(k, v)| format!("  {k} = {v}")));
    }
    if !r.modified_fields.is_empty() {
        lines.push("Modified:".into());
        lines.extend(r.modified_fields.iter().map(|(k, v)| format!("  {k} = {v}")));
    }
    if !r.processing_steps.is_empty() {
        lines.push("Steps:".into());
        lines.extend(
            r.processing_steps
                .iter()
                .enumerate()
                .map(|(i, s)| format!("  {}. {s}", i + 1)),
        );
    }

    lines.push(format!("Original: {}", r.original_packet));
    lines.push(format!("Result:   {}", util::or_dash(&r.modified_packet)));
    if let Some(ref err) = r.error {
        lines.push(format!("Error:    {err}"));
    }
    lines.join("\n")
}

pub async fn handle(client: &ApiClient, args: TestArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let request = TestRequest {
        hex_packet: normalize_hex(&args.hex_packet)?,
        rule_id: args.rule_id.map(RuleId),
    };
    let result = client.run_test(&request).await?;
    let out = output::render_single(&global.output, &result, result_detail, |r| {
        r.modified_packet.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

/// What the Test view shows before a packet is submitted.
pub fn usage_hint() -> &'static str {
    "Paste a packet to dry-run it against the rule set:\n\
     \n  repack test --hex <packet> [--rule <id>]"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_normalized() {
        assert_eq!(normalize_hex("45 00:AB\n01").unwrap(), "4500ab01");
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(normalize_hex("").is_err());
        assert!(normalize_hex("4g").is_err());
        assert!(normalize_hex("abc").is_err());
    }
}
