//! Command executor for dispatching CLI commands

use super::handlers::{MigrateAction, MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;

/// Execute a CLI command with the given settings
///
/// No subcommand means `serve`.
///
/// # Errors
/// Returns errors from the command handlers
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => {
            ServeCommandHandler::new(settings).execute(*dry_run).await
        }
        None => ServeCommandHandler::new(settings).execute(false).await,
        Some(Commands::Migrate {
            dry_run,
            rollback,
            reset,
        }) => {
            let action = MigrateAction::from_flags(*dry_run, *rollback, *reset);
            MigrateCommandHandler::new(settings).execute(action).await
        }
    }
}
