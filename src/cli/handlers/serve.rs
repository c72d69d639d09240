//! Serve command handler
//!
//! Handles the serve command including dry-run validation and server startup.

use crate::config::Settings;
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    /// Create a new serve command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the serve command with optional dry-run support
    ///
    /// # Arguments
    /// * `dry_run` - If true, validates configuration and exits without
    ///   starting the server
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        self.config.validate()?;

        if dry_run {
            println!("Configuration is valid");
            println!("Server would bind to: {}", self.config.server.address());
            println!(
                "Database url is {}",
                if self.config.database.url.is_empty() {
                    "not configured"
                } else {
                    "configured"
                }
            );
            println!("Dry run completed successfully");
            return Ok(());
        }

        Server::new(self.config).run().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/roster_test".to_string();
        config
    }

    #[tokio::test]
    async fn dry_run_passes_with_valid_config() {
        let handler = ServeCommandHandler::new(valid_config());
        assert!(handler.execute(true).await.is_ok());
    }

    #[tokio::test]
    async fn dry_run_fails_with_invalid_config() {
        let mut config = valid_config();
        config.server.port = 0;
        let handler = ServeCommandHandler::new(config);
        assert!(handler.execute(true).await.is_err());
    }
}
