//! `repack open`: drive the view router and load the resulting view.
//!
//! Several paths may be given; they are visited in order, and `--back`
//! then steps to the one before the last.
//!
//! Navigation happens first and never touches the network. Only once the
//! router has settled on a view is that view's data fetched, using the
//! same handlers as the resource subcommands.

use repack_api::ApiClient;
use repack_router::{Location, Router, View};

use crate::cli::{GlobalOpts, LogsListArgs, OpenArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::{fields, logs, network, nftrules, routes, rules, test_mode};

pub async fn handle(args: &OpenArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut router = Router::new();
    for path in &args.paths {
        router.navigate(path);
    }
    if args.back && router.back().is_none() {
        output::notice("No earlier page to go back to", global.quiet);
    }
    let location = router
        .current()
        .cloned()
        .unwrap_or_else(|| repack_router::resolve("/"));
    tracing::debug!(requested = ?args.paths, back = args.back, ?location, "navigated");

    let view = match location {
        Location::View { view } => view,
        Location::NotFound { path } => {
            return Err(CliError::RouteNotFound {
                path,
                available: routes::available_paths(),
            });
        }
    };

    output::notice(&format!("{} ({})", view.name(), view.path()), global.quiet);
    if view == View::Test {
        output::print_output(test_mode::usage_hint(), global.quiet);
        return Ok(());
    }

    let client = crate::config::client(global)?;
    load_view(&client, view, global).await
}

/// Fetch what a view shows on entry.
async fn load_view(client: &ApiClient, view: View, global: &GlobalOpts) -> Result<(), CliError> {
    match view {
        View::Network => network::list_interfaces(client, global).await,
        View::NftRules => nftrules::list(client, global).await,
        View::Rules => {
            rules::list(client, global).await?;
            // The fields table sits under the rules table; structured
            // output stays a single document.
            if matches!(global.output, OutputFormat::Table) {
                fields::list(client, global).await?;
            }
            Ok(())
        }
        View::Logs => logs::list(client, LogsListArgs::default(), global).await,
        View::Test => Ok(()),
    }
}
