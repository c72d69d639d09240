//! Command handlers for the CLI.

mod migrate;
mod serve;

pub use migrate::MigrateCommandHandler;
pub use serve::ServeCommandHandler;
