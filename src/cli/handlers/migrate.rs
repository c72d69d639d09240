//! Migrate command handler
//!
//! Handles database migration operations including dry-run and rollback.

use crate::config::Settings;
use crate::db::{list_pending_migrations, revert_last_migration, run_pending_migrations};
use crate::error::{AppError, AppResult};

/// Handler for the migrate command
pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    /// Create a new migrate command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the migrate command with dry-run and rollback support
    ///
    /// # Arguments
    /// * `dry_run` - If true, shows pending migrations without applying them
    /// * `rollback` - Optional number of migrations to rollback
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        if dry_run {
            return self.show_pending_migrations().await;
        }

        if let Some(steps) = rollback {
            self.rollback_migrations(steps).await
        } else {
            self.run_migrations().await
        }
    }

    /// Show pending migrations without applying them
    async fn show_pending_migrations(&self) -> AppResult<()> {
        println!("Checking for pending migrations...");

        let pending = list_pending_migrations(&self.config.database).await?;

        if pending.is_empty() {
            println!("No pending migrations found - database is up to date");
        } else {
            println!("Found {} pending migration(s):", pending.len());
            for name in &pending {
                println!("  - {}", name);
            }
            println!("\nRun without --dry-run to apply these migrations");
        }

        Ok(())
    }

    /// Run pending migrations
    async fn run_migrations(&self) -> AppResult<()> {
        println!("Running database migrations...");
        run_pending_migrations(&self.config.database).await?;
        println!("Database migration completed successfully");
        Ok(())
    }

    /// Rollback the specified number of migrations
    async fn rollback_migrations(&self, steps: u32) -> AppResult<()> {
        if steps == 0 {
            return Err(AppError::Validation {
                field: "rollback_steps".to_string(),
                reason: "Number of rollback steps must be greater than 0".to_string(),
            });
        }

        println!("Rolling back {} migration(s)...", steps);

        for _ in 0..steps {
            let version = revert_last_migration(&self.config.database).await?;
            println!("  - reverted {}", version);
        }

        println!("Migration rollback completed successfully");
        Ok(())
    }
}
