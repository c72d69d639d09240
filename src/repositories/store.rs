//! Storage seam for employee persistence.
//!
//! The service layer talks to this trait only; the production
//! implementation is backed by PostgreSQL and the in-memory one backs
//! handler/service tests without a running database.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::models::{Employee, EmployeeChanges, NewEmployee};

/// Column an employee page can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Age,
    Email,
}

/// Ordering direction for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A bounded, ordered slice request. Page numbers are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: i64,
    pub page_size: i64,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl PageRequest {
    /// Number of rows to skip before the requested page starts.
    ///
    /// Saturates instead of wrapping so an enormous page number lands past
    /// the last row (an empty page) rather than becoming a negative OFFSET.
    pub fn offset(&self) -> i64 {
        self.page_number.saturating_mul(self.page_size)
    }
}

/// Durable CRUD plus the lookup/query operations over the employees table.
///
/// Each operation is a single-row or single-table action covered by the
/// store engine's own atomicity guarantee. The unique index on `email` is
/// enforced here, not in the service.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Inserts a new employee and returns it with the generated id.
    async fn insert(&self, new_employee: NewEmployee) -> AppResult<Employee>;

    /// Overwrites name/age/email of the row matching `id`, preserving the id.
    async fn update(&self, id: i64, changes: EmployeeChanges) -> AppResult<Employee>;

    /// Returns all rows; order unspecified.
    async fn find_all(&self) -> AppResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>>;

    /// Exact-match lookup used by the uniqueness fast path.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Equality lookup on email and name, kept for compatibility.
    async fn find_by_email_and_name(&self, email: &str, name: &str)
    -> AppResult<Option<Employee>>;

    /// Deletes zero or one row; returns the number of rows removed.
    async fn delete_by_id(&self, id: i64) -> AppResult<u64>;

    /// Returns the requested slice plus the total row count.
    async fn find_page(&self, page: PageRequest) -> AppResult<(Vec<Employee>, i64)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_offset() {
        let page = PageRequest {
            page_number: 3,
            page_size: 25,
            sort_field: SortField::Name,
            sort_direction: SortDirection::Desc,
        };
        assert_eq!(page.offset(), 75);
    }

    #[test]
    fn page_request_offset_saturates_instead_of_wrapping() {
        let page = PageRequest {
            page_number: i64::MAX,
            page_size: 100,
            sort_field: SortField::Id,
            sort_direction: SortDirection::Asc,
        };
        assert_eq!(page.offset(), i64::MAX);
    }

    #[test]
    fn sort_params_deserialize_lowercase() {
        let field: SortField = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(field, SortField::Email);
        let direction: SortDirection = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(direction, SortDirection::Desc);
    }
}
