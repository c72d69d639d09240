//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `employee` - Employee-related request/response DTOs
//! - `error` - Common error response DTOs
//! - `pagination` - Pagination-related DTOs

mod employee;
mod error;
mod pagination;

pub use employee::{
    CreateEmployeeRequest, DeleteEmployeeResponse, EmployeeIdQuery, EmployeeResponse,
    UpdateEmployeeRequest,
};
pub use error::ErrorResponse;
pub use pagination::{EmployeePageParams, PagedResponse, PaginationMeta};
