use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Serialize, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// NewEmployee model for inserting new records
/// Derives Insertable for INSERT operations
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::employees)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// EmployeeChanges model for updates.
///
/// All three mutable fields are overwritten in place; the id never changes.
#[derive(Debug, AsChangeset, Deserialize, Clone)]
#[diesel(table_name = crate::schema::employees)]
pub struct EmployeeChanges {
    pub name: String,
    pub age: i32,
    pub email: String,
}
