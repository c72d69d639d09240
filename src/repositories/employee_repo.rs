//! Employee repository for async database operations.
//!
//! Provides CRUD operations for the employees table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{Employee, EmployeeChanges, NewEmployee};
use crate::repositories::store::{EmployeeStore, PageRequest, SortDirection, SortField};

/// Employee repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<PgEmployeeRepository>`.
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: AsyncDbPool,
}

impl PgEmployeeRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeRepository {
    /// Inserts a new employee.
    ///
    /// A violation of the `employees_email_key` unique constraint surfaces
    /// as `AppError::Duplicate` through the database error converter.
    async fn insert(&self, new_employee: NewEmployee) -> AppResult<Employee> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(employees)
            .values(&new_employee)
            .returning(Employee::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    /// Overwrites name/age/email of the row matching `id`.
    ///
    /// Diesel reports an update on a missing row as `NotFound`, which the
    /// converter maps to `AppError::NotFound`.
    async fn update(&self, employee_id: i64, changes: EmployeeChanges) -> AppResult<Employee> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(employees.filter(id.eq(employee_id)))
            .set(&changes)
            .returning(Employee::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        employees
            .select(Employee::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, employee_id: i64) -> AppResult<Option<Employee>> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        employees
            .filter(id.eq(employee_id))
            .select(Employee::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(Into::into)
    }

    async fn find_by_email(&self, employee_email: &str) -> AppResult<Option<Employee>> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        employees
            .filter(email.eq(employee_email))
            .select(Employee::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(Into::into)
    }

    async fn find_by_email_and_name(
        &self,
        employee_email: &str,
        employee_name: &str,
    ) -> AppResult<Option<Employee>> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        employees
            .filter(email.eq(employee_email))
            .filter(name.eq(employee_name))
            .select(Employee::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(Into::into)
    }

    async fn delete_by_id(&self, employee_id: i64) -> AppResult<u64> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        let affected = diesel::delete(employees.filter(id.eq(employee_id)))
            .execute(&mut conn)
            .await?;
        Ok(affected as u64)
    }

    async fn find_page(&self, page: PageRequest) -> AppResult<(Vec<Employee>, i64)> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        let mut query = employees.select(Employee::as_select()).into_boxed();
        query = match (page.sort_field, page.sort_direction) {
            (SortField::Id, SortDirection::Asc) => query.order(id.asc()),
            (SortField::Id, SortDirection::Desc) => query.order(id.desc()),
            (SortField::Name, SortDirection::Asc) => query.order(name.asc()),
            (SortField::Name, SortDirection::Desc) => query.order(name.desc()),
            (SortField::Age, SortDirection::Asc) => query.order(age.asc()),
            (SortField::Age, SortDirection::Desc) => query.order(age.desc()),
            (SortField::Email, SortDirection::Asc) => query.order(email.asc()),
            (SortField::Email, SortDirection::Desc) => query.order(email.desc()),
        };

        let rows = query
            .offset(page.offset())
            .limit(page.page_size)
            .load(&mut conn)
            .await?;

        let total: i64 = employees.count().get_result(&mut conn).await?;

        Ok((rows, total))
    }
}
