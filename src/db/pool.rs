//! Async database connection pool implementation.
//!
//! Uses the bb8 connection pool manager with diesel_async for PostgreSQL
//! connections, plus embedded migrations run over a blocking connection.

use std::time::Duration;

use diesel::{Connection, PgConnection};
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Migrations compiled into the binary from the `migrations/` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Async connection pool type alias.
///
/// bb8::Pool internally uses Arc, so Clone is cheap (just reference count
/// increment). Structures holding AsyncDbPool can derive Clone without
/// additional Arc wrapping.
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Creates an async database connection pool from configuration.
///
/// # Errors
///
/// - `AppError::Configuration` - If the database url is empty
/// - `AppError::ConnectionPool` - If connection pool creation fails
pub async fn establish_async_connection_pool(config: &DatabaseConfig) -> AppResult<AsyncDbPool> {
    if config.url.is_empty() {
        return Err(AppError::Configuration {
            key: "database.url".to_string(),
            source: anyhow::anyhow!(
                "Database url is empty; set it in config or via ROSTER_DATABASE__URL"
            ),
        });
    }

    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.url.clone());
    let pool = Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)
        .await
        .map_err(|e| AppError::ConnectionPool {
            source: anyhow::Error::from(e),
        })?;

    Ok(pool)
}

/// Runs any pending embedded migrations against the configured database.
///
/// diesel_migrations needs a synchronous connection, so this opens a
/// dedicated blocking `PgConnection` on a spawn_blocking thread rather than
/// borrowing from the async pool.
pub async fn run_pending_migrations(config: &DatabaseConfig) -> AppResult<()> {
    let url = config.url.clone();
    if url.is_empty() {
        return Err(AppError::Configuration {
            key: "database.url".to_string(),
            source: anyhow::anyhow!(
                "Database url is empty; set it in config or via ROSTER_DATABASE__URL"
            ),
        });
    }

    let applied = tokio::task::spawn_blocking(move || -> AppResult<Vec<String>> {
        let mut conn = PgConnection::establish(&url).map_err(|e| AppError::Database {
            operation: "connect for migrations".to_string(),
            source: anyhow::Error::from(e),
        })?;

        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "run pending migrations".to_string(),
                source: anyhow::anyhow!("{}", e),
            })?;

        Ok(versions.iter().map(|v| v.to_string()).collect())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })??;

    if applied.is_empty() {
        info!("No pending migrations");
    } else {
        info!(count = applied.len(), migrations = ?applied, "Applied migrations");
    }

    Ok(())
}

/// Lists pending migrations without applying them.
pub async fn list_pending_migrations(config: &DatabaseConfig) -> AppResult<Vec<String>> {
    let url = config.url.clone();
    if url.is_empty() {
        return Err(AppError::Configuration {
            key: "database.url".to_string(),
            source: anyhow::anyhow!(
                "Database url is empty; set it in config or via ROSTER_DATABASE__URL"
            ),
        });
    }

    tokio::task::spawn_blocking(move || -> AppResult<Vec<String>> {
        let mut conn = PgConnection::establish(&url).map_err(|e| AppError::Database {
            operation: "connect for migrations".to_string(),
            source: anyhow::Error::from(e),
        })?;

        let pending = conn
            .pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "list pending migrations".to_string(),
                source: anyhow::anyhow!("{}", e),
            })?;

        Ok(pending.iter().map(|m| m.name().to_string()).collect())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}

/// Reverts the most recently applied migration.
pub async fn revert_last_migration(config: &DatabaseConfig) -> AppResult<String> {
    let url = config.url.clone();

    tokio::task::spawn_blocking(move || -> AppResult<String> {
        let mut conn = PgConnection::establish(&url).map_err(|e| AppError::Database {
            operation: "connect for migrations".to_string(),
            source: anyhow::Error::from(e),
        })?;

        let version = conn
            .revert_last_migration(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "revert last migration".to_string(),
                source: anyhow::anyhow!("{}", e),
            })?;

        Ok(version.to_string())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}
