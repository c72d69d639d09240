//! Repository layer for data access operations.
//!
//! The [`EmployeeStore`] trait is the narrow storage seam; the Postgres
//! repository is the production implementation and the in-memory store is
//! the test double.

mod employee_repo;
mod memory;
mod store;

pub use employee_repo::PgEmployeeRepository;
pub use memory::InMemoryEmployeeStore;
pub use store::{EmployeeStore, PageRequest, SortDirection, SortField};

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub employees: PgEmployeeRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            employees: PgEmployeeRepository::new(pool),
        }
    }
}
