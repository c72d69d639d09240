//! Employee-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Employee, EmployeeChanges, NewEmployee};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new employee. The id is system-generated and
/// must not be supplied.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    #[schema(min_length = 1, max_length = 255, example = "Vedha")]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    #[schema(minimum = 0, maximum = 150, example = 23)]
    pub age: i32,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email", example = "vedha@gmail.com")]
    pub email: String,
}

impl CreateEmployeeRequest {
    /// Converts the request DTO into a NewEmployee model for insertion.
    pub fn into_new_employee(self) -> NewEmployee {
        NewEmployee {
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}

/// Request body for updating an employee. All three mutable fields are
/// overlaid onto the existing record; the id is taken from the query string
/// and never changes.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    #[schema(min_length = 1, max_length = 255)]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    #[schema(minimum = 0, maximum = 150)]
    pub age: i32,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
}

impl UpdateEmployeeRequest {
    /// Converts the request DTO into an EmployeeChanges model for update.
    pub fn into_changes(self) -> EmployeeChanges {
        EmployeeChanges {
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}

/// Query parameter carrying the target employee id.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeIdQuery {
    /// Employee id
    #[serde(rename = "employeeId")]
    #[param(example = 1)]
    pub employee_id: i64,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for employee data.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Vedha")]
    pub name: String,
    #[schema(example = 23)]
    pub age: i32,
    #[schema(format = "email", example = "vedha@gmail.com")]
    pub email: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            age: employee.age,
            email: employee.email,
        }
    }
}

/// Response body for deletes: how many rows were removed (0 or 1).
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteEmployeeResponse {
    #[serde(rename = "deleteCount")]
    #[schema(example = 1)]
    pub delete_count: u64,
}
