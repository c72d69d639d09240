//! Command-line interface.
//!
//! Parses arguments, loads layered configuration with CLI overrides applied,
//! initializes logging and dispatches to the command handlers.

pub mod handlers;
pub mod parser;

pub use parser::{Cli, Commands};

use clap::Parser;

use crate::config::{ConfigLoader, Settings};
use crate::logger;

/// Parse arguments and run the selected command.
///
/// Running without a subcommand is equivalent to `serve`.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = ConfigLoader::with_overrides(cli.config.clone(), cli.env.clone().map(Into::into))?;
    let mut settings = loader.load()?;
    apply_cli_overrides(&mut settings, &cli);

    logger::init(&settings.logger)?;

    match cli.command {
        Some(Commands::Migrate { dry_run, rollback }) => {
            handlers::MigrateCommandHandler::new(settings)
                .execute(dry_run, rollback)
                .await?;
            Ok(())
        }
        Some(Commands::Serve {
            host,
            port,
            dry_run,
        }) => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            handlers::ServeCommandHandler::new(settings)
                .execute(dry_run)
                .await
        }
        None => {
            handlers::ServeCommandHandler::new(settings)
                .execute(false)
                .await
        }
    }
}

/// Applies global flag overrides to the loaded settings.
fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) {
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }
}
