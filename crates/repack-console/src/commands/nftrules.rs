//! nftables rule command handlers.

use tabled::Tabled;

use repack_api::ApiClient;
use repack_api::ids::NftRuleId;
use repack_api::models::NftRule;

use crate::cli::{GlobalOpts, NftRulesArgs, NftRulesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct NftRuleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
    #[tabled(rename = "Prio")]
    priority: i64,
    #[tabled(rename = "Match")]
    matcher: String,
    #[tabled(rename = "Action")]
    action: String,
}

impl From<&NftRule> for NftRuleRow {
    fn from(r: &NftRule) -> Self {
        Self {
            id: id_of(r),
            name: r.name.clone(),
            enabled: util::yes_no(r.enabled),
            priority: r.priority,
            matcher: r.summary.clone().unwrap_or_else(|| match_summary(r)),
            action: verdict(r),
        }
    }
}

fn id_of(r: &NftRule) -> String {
    r.id.map(|id| id.to_string()).unwrap_or_default()
}

fn verdict(r: &NftRule) -> String {
    if r.action == "queue" {
        format!("queue {}", r.queue_num)
    } else {
        r.action.clone()
    }
}

/// Compact `proto src:port -> dst:port` line for rules the backend
/// did not summarise.
fn match_summary(r: &NftRule) -> String {
    fn endpoint(ip: &str, port: &str) -> String {
        match (ip.trim(), port.trim()) {
            ("", "") => "*".into(),
            (ip, "") => ip.into(),
            ("", port) => format!("*:{port}"),
            (ip, port) => format!("{ip}:{port}"),
        }
    }
    let proto = if r.protocol.trim().is_empty() {
        "any"
    } else {
        r.protocol.as_str()
    };
    format!(
        "{proto} {} -> {}",
        endpoint(&r.src_ip, &r.src_port),
        endpoint(&r.dst_ip, &r.dst_port)
    )
}

fn nft_rule_detail(r: &NftRule) -> String {
    let log = if r.log_enabled {
        format!("yes (prefix {:?})", r.log_prefix)
    } else {
        "no".into()
    };
    [
        format!("ID:       {}", util::or_dash(&id_of(r))),
        format!("Name:     {}", r.name),
        format!("Enabled:  {}", r.enabled),
        format!("Priority: {}", r.priority),
        format!("Match:    {}", match_summary(r)),
        format!("Action:   {}", verdict(r)),
        format!("Logging:  {log}"),
    ]
    .join("\n")
}

pub async fn list(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    let rules = util::items(client.list_nft_rules().await?);
    let out = output::render_list(&global.output, &rules, |r| NftRuleRow::from(r), id_of);
    output::print_output(&out, global.quiet);
    Ok(())
}

#[allow(clippy::too_many_lines)]
pub async fn handle(
    client: &ApiClient,
    args: NftRulesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NftRulesCommand::List => list(client, global).await,

        NftRulesCommand::Get { id } => {
            let id = NftRuleId(id);
            let rule = util::found(
                client.get_nft_rule(id).await,
                "nftables rule",
                id,
                "nftrules list",
            )?;
            let out = output::render_single(&global.output, &rule, nft_rule_detail, id_of);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NftRulesCommand::Create {
            name,
            action,
            protocol,
            src_ip,
            dst_ip,
            src_port,
            dst_port,
            queue_num,
            priority,
            log_prefix,
            from_file,
        } => {
            let rule = if let Some(ref path) = from_file {
                util::read_json_file(path)?
            } else {
                NftRule {
                    name: name.unwrap_or_default(),
                    enabled: true,
                    priority,
                    src_ip,
                    dst_ip,
                    src_port,
                    dst_port,
                    protocol,
                    log_enabled: log_prefix.is_some(),
                    log_prefix: log_prefix.unwrap_or_default(),
                    action: action.as_str().into(),
                    queue_num,
                    ..NftRule::default()
                }
            };
            let resp = client.create_nft_rule(&rule).await?;
            if let Some(ref created) = resp.data {
                let out = output::render_single(&global.output, created, nft_rule_detail, id_of);
                output::print_output(&out, global.quiet);
            }
            util::acknowledge(&resp, "nftables rule created", global.quiet);
            output::notice("Run `repack nftrules apply` to load it", global.quiet);
            Ok(())
        }

        NftRulesCommand::Update { id, from_file } => {
            let rule: NftRule = util::read_json_file(&from_file)?;
            let resp = client.update_nft_rule(NftRuleId(id), &rule).await?;
            util::acknowledge(&resp, "nftables rule updated", global.quiet);
            Ok(())
        }

        NftRulesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete nftables rule {id}?"), global.yes)? {
                return Ok(());
            }
            let ack = client.delete_nft_rule(NftRuleId(id)).await?;
            util::acknowledge(&ack, "nftables rule deleted", global.quiet);
            Ok(())
        }

        NftRulesCommand::Toggle { id } => {
            let resp = client.toggle_nft_rule(NftRuleId(id)).await?;
            let fallback = match resp.data {
                Some(ref r) if r.enabled => format!("nftables rule {id} enabled"),
                Some(_) => format!("nftables rule {id} disabled"),
                None => format!("nftables rule {id} toggled"),
            };
            util::acknowledge(&resp, &fallback, global.quiet);
            Ok(())
        }

        NftRulesCommand::Apply => {
            if !util::confirm("Replace the live nftables rule set?", global.yes)? {
                return Ok(());
            }
            let ack = client.apply_nft_rules().await?;
            util::acknowledge(&ack, "nftables rules applied", global.quiet);
            Ok(())
        }
    }
}
