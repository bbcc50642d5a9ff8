//! Processing log handlers.

use tabled::Tabled;

use repack_api::ApiClient;
use repack_api::ids::{LogId, RuleId};
use repack_api::models::{LogEntry, LogFilter, Pagination};

use crate::cli::{GlobalOpts, LogsArgs, LogsCommand, LogsListArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct LogRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Rule")]
    rule: String,
    #[tabled(rename = "Flow")]
    flow: String,
    #[tabled(rename = "Result")]
    result: String,
}

impl From<&LogEntry> for LogRow {
    fn from(l: &LogEntry) -> Self {
        Self {
            id: l.id.to_string(),
            time: processed_at(l),
            rule: util::or_dash(&l.rule_name).to_owned(),
            flow: flow(l),
            result: l.result.clone(),
        }
    }
}

fn processed_at(l: &LogEntry) -> String {
    l.processed_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

fn flow(l: &LogEntry) -> String {
    format!(
        "{} {}:{} -> {}:{}",
        util::or_dash(&l.protocol),
        util::or_dash(&l.src_ip),
        l.src_port,
        util::or_dash(&l.dst_ip),
        l.dst_port
    )
}

fn log_detail(l: &LogEntry) -> String {
    let mut lines = vec![
        format!("ID:        {}", l.id),
        format!("Time:      {}", util::or_dash(&processed_at(l))),
        format!(
            "Rule:      {} ({})",
            util::or_dash(&l.rule_name),
            l.rule_id.map_or_else(|| "-".into(), |id| id.to_string())
        ),
        format!("Flow:      {}", flow(l)),
        format!("Result:    {}", l.result),
        format!("Fields:    {}", util::or_dash(&l.field_values)),
        format!("Original:  {}", l.original_packet),
        format!("Modified:  {}", util::or_dash(&l.modified_packet)),
    ];
    if !l.error_message.trim().is_empty() {
        lines.push(format!("Error:     {}", l.error_message));
    }
    lines.join("\n")
}

fn page_footer(p: &Pagination) -> String {
    format!(
        "Page {} of {} ({} entries, {} per page)",
        p.page, p.total_pages, p.total, p.page_size
    )
}

pub async fn list(
    client: &ApiClient,
    args: LogsListArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let filter = LogFilter {
        page: args.page,
        page_size: args.page_size,
        rule_id: args.rule_id.map(RuleId),
        result: args.result,
    };
    let resp = client.list_logs(&filter).await?;
    let pagination = resp.pagination;
    let entries = util::items(resp);

    let out = output::render_list(&global.output, &entries, |l| LogRow::from(l), |l| {
        l.id.to_string()
    });
    output::print_output(&out, global.quiet);
    if let (OutputFormat::Table, Some(p)) = (&global.output, pagination) {
        output::notice(&page_footer(&p), global.quiet);
    }
    Ok(())
}

pub async fn handle(client: &ApiClient, args: LogsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        LogsCommand::List(list_args) => list(client, list_args, global).await,

        LogsCommand::Get { id } => {
            let id = LogId(id);
            let entry = util::found(client.get_log(id).await, "log entry", id, "logs list")?;
            let out = output::render_single(&global.output, &entry, log_detail, |l| {
                l.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LogsCommand::Clear { days } => {
            let prompt = match days {
                Some(d) => format!("Delete logs older than {d} days?"),
                None => "Delete all processing logs?".into(),
            };
            if !util::confirm(&prompt, global.yes)? {
                return Ok(());
            }
            let ack = client.clear_logs(days).await?;
            util::acknowledge(&ack, "Logs cleared", global.quiet);
            Ok(())
        }
    }
}
