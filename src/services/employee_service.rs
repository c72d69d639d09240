//! Employee service for business logic operations.
//!
//! The only business rule lives here: no two employees may share an email.
//! Everything else is a passthrough to the storage seam.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Employee, EmployeeChanges, NewEmployee};
use crate::repositories::{EmployeeStore, PageRequest};

/// Employee service wrapping an [`EmployeeStore`].
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    /// Creates a new EmployeeService over the given store.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Creates a new employee.
    ///
    /// The email lookup is a fast path producing a friendlier error; the
    /// unique constraint in the store remains the authoritative guard, so a
    /// concurrent create racing past this check still fails with the same
    /// `Duplicate` error.
    pub async fn create(&self, new_employee: NewEmployee) -> AppResult<Employee> {
        if self.store.find_by_email(&new_employee.email).await?.is_some() {
            return Err(AppError::duplicate_email(&new_employee.email));
        }
        self.store.insert(new_employee).await
    }

    /// Lists all employees.
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        self.store.find_all().await
    }

    /// Gets an employee by id. Absence is a value, not an error; the HTTP
    /// boundary resolves `None` to a 404.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        self.store.find_by_id(id).await
    }

    /// Equality lookup on email and name, kept for compatibility.
    pub async fn get_by_email_and_name(
        &self,
        email: &str,
        name: &str,
    ) -> AppResult<Option<Employee>> {
        self.store.find_by_email_and_name(email, name).await
    }

    /// Overwrites name/age/email of an existing employee; the id never
    /// changes. The caller fetches the existing record first.
    pub async fn update(&self, id: i64, changes: EmployeeChanges) -> AppResult<Employee> {
        self.store.update(id, changes).await
    }

    /// Deletes an employee; returns the number of rows removed (0 or 1).
    /// Deleting an absent id is not an error.
    pub async fn delete_by_id(&self, id: i64) -> AppResult<u64> {
        self.store.delete_by_id(id).await
    }

    /// Delete variant that reports no count, kept for interface
    /// completeness. Removes the same row as [`Self::delete_by_id`].
    pub async fn delete_by_id_no_return(&self, id: i64) -> AppResult<()> {
        self.store.delete_by_id(id).await.map(|_| ())
    }

    /// Lists employees with pagination and sorting.
    ///
    /// Returns the requested slice plus the total row count.
    pub async fn list_paginated(&self, page: PageRequest) -> AppResult<(Vec<Employee>, i64)> {
        self.store.find_page(page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryEmployeeStore, SortDirection, SortField};

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(InMemoryEmployeeStore::new()))
    }

    fn new_employee(name: &str, age: i32, email: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            age,
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn create_returns_employee_with_positive_id() {
        let service = service();
        let created = service
            .create(new_employee("Vedha", 23, "vedha@gmail.com"))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Vedha");
        assert_eq!(created.age, 23);
        assert_eq!(created.email, "vedha@gmail.com");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let service = service();
        service
            .create(new_employee("Vedha", 23, "vedha@gmail.com"))
            .await
            .unwrap();

        let result = service
            .create(new_employee("Vedha Clone", 24, "vedha@gmail.com"))
            .await;
        match result {
            Err(AppError::Duplicate { field, value, .. }) => {
                assert_eq!(field, "email");
                assert_eq!(value, "vedha@gmail.com");
            }
            other => panic!("Expected Duplicate error, got {:?}", other),
        }

        // Exactly one row for that email remains.
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_by_id_absent_returns_none() {
        let service = service();
        assert!(service.get_by_id(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_preserves_id_and_overlays_fields() {
        let service = service();
        let created = service
            .create(new_employee("Vedha", 22, "vedha@gmail.com"))
            .await
            .unwrap();
        let updated = service
            .update(
                created.id,
                EmployeeChanges {
                    name: "Vedha2".to_string(),
                    age: 23,
                    email: "Vedha2@gmail.com".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Vedha2");
        assert_eq!(updated.age, 23);
        assert_eq!(updated.email, "Vedha2@gmail.com");
    }

    #[tokio::test]
    async fn delete_twice_yields_one_then_zero() {
        let service = service();
        let created = service
            .create(new_employee("Vedha", 23, "vedha@gmail.com"))
            .await
            .unwrap();
        assert_eq!(service.delete_by_id(created.id).await.unwrap(), 1);
        assert_eq!(service.delete_by_id(created.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_no_return_removes_row() {
        let service = service();
        let created = service
            .create(new_employee("Vedha", 23, "vedha@gmail.com"))
            .await
            .unwrap();
        service.delete_by_id_no_return(created.id).await.unwrap();
        assert!(service.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_reflects_creates_minus_deletes() {
        let service = service();
        let a = service
            .create(new_employee("A", 20, "a@gmail.com"))
            .await
            .unwrap();
        service
            .create(new_employee("B", 21, "b@gmail.com"))
            .await
            .unwrap();
        service
            .create(new_employee("C", 22, "c@gmail.com"))
            .await
            .unwrap();
        service.delete_by_id(a.id).await.unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|e| e.id != a.id));
    }

    #[tokio::test]
    async fn list_paginated_sorts_ascending_and_descending() {
        let service = service();
        for (name, age, email) in [
            ("Charlie", 35, "charlie@gmail.com"),
            ("Alice", 28, "alice@gmail.com"),
            ("Bob", 42, "bob@gmail.com"),
        ] {
            service.create(new_employee(name, age, email)).await.unwrap();
        }

        let (page, total) = service
            .list_paginated(PageRequest {
                page_number: 0,
                page_size: 2,
                sort_field: SortField::Age,
                sort_direction: SortDirection::Asc,
            })
            .await
            .unwrap();
        assert_eq!(total, 3);
        let ages: Vec<_> = page.iter().map(|e| e.age).collect();
        assert_eq!(ages, vec![28, 35]);

        let (page, _) = service
            .list_paginated(PageRequest {
                page_number: 0,
                page_size: 2,
                sort_field: SortField::Age,
                sort_direction: SortDirection::Desc,
            })
            .await
            .unwrap();
        let ages: Vec<_> = page.iter().map(|e| e.age).collect();
        assert_eq!(ages, vec![42, 35]);
    }

    #[tokio::test]
    async fn get_by_email_and_name_round_trips() {
        let service = service();
        service
            .create(new_employee("Vedha", 23, "vedha@gmail.com"))
            .await
            .unwrap();
        let found = service
            .get_by_email_and_name("vedha@gmail.com", "Vedha")
            .await
            .unwrap();
        assert!(found.is_some());
        assert!(
            service
                .get_by_email_and_name("vedha@gmail.com", "Someone Else")
                .await
                .unwrap()
                .is_none()
        );
    }
}
