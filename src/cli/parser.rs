//! CLI argument parsing with clap
//!
//! Defines the command-line interface structure, including all commands,
//! arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// An employee roster HTTP service backed by PostgreSQL
#[derive(Parser, Debug)]
#[command(name = "roster-rs")]
#[command(about = "An employee roster HTTP service backed by PostgreSQL")]
#[command(long_about = "
Roster-rs serves employee CRUD operations over JSON HTTP, with layered
configuration management and database migrations built in.

EXAMPLES:
    # Start the server with default configuration
    roster-rs serve

    # Start server on custom host and port
    roster-rs serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    roster-rs --config /path/to/config.toml serve

    # Check configuration without starting server
    roster-rs serve --dry-run

    # Run database migrations
    roster-rs migrate

    # Preview pending migrations
    roster-rs migrate --dry-run

    # Rollback last 2 migrations
    roster-rs migrate --rollback 2
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered config directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Forces a specific environment configuration instead of reading
    /// ROSTER_APP_ENV. Affects which configuration files are loaded.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept
        /// connections from any interface.
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },
    /// Database migration operations
    Migrate {
        /// Show pending migrations without applying them
        #[arg(long, conflicts_with = "rollback")]
        dry_run: bool,

        /// Number of migrations to rollback
        ///
        /// Reverts the specified number of most recent migrations.
        /// Use with caution as this can result in data loss.
        #[arg(long, value_name = "STEPS", conflicts_with = "dry_run")]
        rollback: Option<u32>,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["roster-rs"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.env.is_none());
    }

    #[test]
    fn serve_accepts_host_and_port() {
        let cli =
            Cli::try_parse_from(["roster-rs", "serve", "--host", "0.0.0.0", "--port", "8080"])
                .unwrap();
        match cli.command {
            Some(Commands::Serve {
                host,
                port,
                dry_run,
            }) => {
                assert_eq!(host, Some("0.0.0.0".to_string()));
                assert_eq!(port, Some(8080));
                assert!(!dry_run);
            }
            other => panic!("Expected Serve command, got {:?}", other),
        }
    }

    #[test]
    fn migrate_dry_run_conflicts_with_rollback() {
        let result =
            Cli::try_parse_from(["roster-rs", "migrate", "--dry-run", "--rollback", "2"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["roster-rs", "--verbose", "--quiet"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn env_aliases_parse() {
        let cli = Cli::try_parse_from(["roster-rs", "--env", "prod"]).unwrap();
        assert!(matches!(cli.env, Some(Environment::Production)));
    }
}
