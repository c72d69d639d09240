//! Application state for the Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool, used by health checks
    pub db_pool: AsyncDbPool,
}

impl AppState {
    /// Creates a new AppState from a database connection pool.
    ///
    /// Initializes all repositories and services from the provided pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        let repos = Repositories::new(pool.clone());
        let services = Services::new(repos);
        Self {
            services,
            db_pool: pool,
        }
    }

    /// State backed by the in-memory store, for handler tests.
    ///
    /// The pool is built lazily and never connects; only the health endpoints
    /// touch it, and tests do not call them against this state.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        use std::sync::Arc;

        use diesel_async::AsyncPgConnection;
        use diesel_async::pooled_connection::AsyncDieselConnectionManager;
        use diesel_async::pooled_connection::bb8::Pool;

        use crate::repositories::InMemoryEmployeeStore;

        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(
            "postgres://localhost/unreachable",
        );
        let db_pool = Pool::builder().build_unchecked(manager);

        Self {
            services: Services::from_store(Arc::new(InMemoryEmployeeStore::new())),
            db_pool,
        }
    }
}
