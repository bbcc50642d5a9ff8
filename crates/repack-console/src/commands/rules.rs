//! Rule command handlers.

use tabled::Tabled;

use repack_api::ApiClient;
use repack_api::ids::RuleId;
use repack_api::models::Rule;

use crate::cli::{GlobalOpts, RulesArgs, RulesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
    #[tabled(rename = "Priority")]
    priority: i64,
    #[tabled(rename = "Match")]
    match_condition: String,
}

impl From<&Rule> for RuleRow {
    fn from(r: &Rule) -> Self {
        Self {
            id: id_of(r),
            name: r.name.clone(),
            enabled: util::yes_no(r.enabled),
            priority: r.priority,
            match_condition: r.match_condition.clone(),
        }
    }
}

pub(super) fn id_of(r: &Rule) -> String {
    r.id.map(|id| id.to_string()).unwrap_or_default()
}

fn rule_detail(r: &Rule) -> String {
    [
        format!("ID:       {}", util::or_dash(&id_of(r))),
        format!("Name:     {}", r.name),
        format!("Enabled:  {}", r.enabled),
        format!("Priority: {}", r.priority),
        format!("Match:    {}", util::or_dash(&r.match_condition)),
        format!("Actions:  {}", util::or_dash(&r.actions)),
        format!("Output:   {}", util::or_dash(&r.output_options)),
    ]
    .join("\n")
}

pub async fn list(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    let rules = util::items(client.list_rules().await?);
    let out = output::render_list(&global.output, &rules, |r| RuleRow::from(r), id_of);
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle(
    client: &ApiClient,
    args: RulesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RulesCommand::List => list(client, global).await,

        RulesCommand::Get { id } => {
            let id = RuleId(id);
            let rule = util::found(client.get_rule(id).await, "rule", id, "rules list")?;
            let out = output::render_single(&global.output, &rule, rule_detail, id_of);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RulesCommand::Create {
            name,
            match_condition,
            actions,
            output_options,
            priority,
            enabled,
            from_file,
        } => {
            let rule = if let Some(ref path) = from_file {
                util::read_json_file(path)?
            } else {
                Rule {
                    name: name.unwrap_or_default(),
                    enabled,
                    match_condition: match_condition.unwrap_or_default(),
                    actions,
                    output_options,
                    priority,
                    ..Rule::default()
                }
            };
            let resp = client.create_rule(&rule).await?;
            if let Some(ref created) = resp.data {
                let out = output::render_single(&global.output, created, rule_detail, id_of);
                output::print_output(&out, global.quiet);
            }
            util::acknowledge(&resp, "Rule created", global.quiet);
            Ok(())
        }

        RulesCommand::Update { id, from_file } => {
            let rule: Rule = util::read_json_file(&from_file)?;
            let resp = client.update_rule(RuleId(id), &rule).await?;
            util::acknowledge(&resp, "Rule updated", global.quiet);
            Ok(())
        }

        RulesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete rule {id}?"), global.yes)? {
                return Ok(());
            }
            let ack = client.delete_rule(RuleId(id)).await?;
            util::acknowledge(&ack, "Rule deleted", global.quiet);
            Ok(())
        }

        RulesCommand::Toggle { id } => {
            let resp = client.toggle_rule(RuleId(id)).await?;
            let fallback = match resp.data {
                Some(ref r) if r.enabled => format!("Rule {id} enabled"),
                Some(_) => format!("Rule {id} disabled"),
                None => format!("Rule {id} toggled"),
            };
            util::acknowledge(&resp, &fallback, global.quiet);
            Ok(())
        }
    }
}
