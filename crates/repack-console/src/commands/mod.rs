//! Command dispatch: bridges CLI args -> backend calls -> output formatting.

pub mod config_cmd;
pub mod fields;
pub mod logs;
pub mod network;
pub mod nftrules;
pub mod open;
pub mod routes;
pub mod rules;
pub mod test_mode;
pub mod util;

use repack_api::ApiClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Network(args) => network::handle(client, args, global).await,
        Command::Fields(args) => fields::handle(client, args, global).await,
        Command::Rules(args) => rules::handle(client, args, global).await,
        Command::Nftrules(args) => nftrules::handle(client, args, global).await,
        Command::Test(args) => test_mode::handle(client, args, global).await,
        Command::Logs(args) => logs::handle(client, args, global).await,
        // Handled before a client is built
        Command::Open(_) | Command::Routes | Command::Config(_) | Command::Completions(_) => {
            Ok(())
        }
    }
}
