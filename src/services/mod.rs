//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod employee_service;

pub use employee_service::EmployeeService;

use std::sync::Arc;

use crate::repositories::{EmployeeStore, Repositories};

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the underlying store handles use `Arc`.
#[derive(Clone)]
pub struct Services {
    pub employees: EmployeeService,
}

impl Services {
    /// Creates a new Services instance from the production repositories.
    pub fn new(repos: Repositories) -> Self {
        Self::from_store(Arc::new(repos.employees))
    }

    /// Creates services over any store implementation. Tests use this with
    /// the in-memory store.
    pub fn from_store(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            employees: EmployeeService::new(store),
        }
    }
}
