//! In-memory employee store.
//!
//! Backs service and handler tests without a running PostgreSQL instance.
//! Mirrors the production schema's behavior, including the unique index on
//! `email`, so the duplicate-email path is observable without a database.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::{Employee, EmployeeChanges, NewEmployee};
use crate::repositories::store::{EmployeeStore, PageRequest, SortDirection, SortField};

#[derive(Debug, Default)]
struct MemoryInner {
    rows: Vec<Employee>,
    next_id: i64,
}

/// Mutex-guarded in-memory implementation of [`EmployeeStore`].
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    inner: Mutex<MemoryInner>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, MemoryInner>> {
        self.inner.lock().map_err(|e| AppError::Internal {
            source: anyhow::Error::msg(e.to_string()),
        })
    }
}

fn sort_rows(rows: &mut [Employee], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Age => a.age.cmp(&b.age),
            SortField::Email => a.email.cmp(&b.email),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn insert(&self, new_employee: NewEmployee) -> AppResult<Employee> {
        let mut inner = self.lock()?;
        if inner.rows.iter().any(|e| e.email == new_employee.email) {
            return Err(AppError::duplicate_email(&new_employee.email));
        }
        inner.next_id += 1;
        let employee = Employee {
            id: inner.next_id,
            name: new_employee.name,
            age: new_employee.age,
            email: new_employee.email,
        };
        inner.rows.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, changes: EmployeeChanges) -> AppResult<Employee> {
        let mut inner = self.lock()?;
        if inner.rows.iter().any(|e| e.id != id && e.email == changes.email) {
            return Err(AppError::duplicate_email(&changes.email));
        }
        let row = inner
            .rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::employee_not_found(id))?;
        row.name = changes.name;
        row.age = changes.age;
        row.email = changes.email;
        Ok(row.clone())
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        Ok(self.lock()?.rows.clone())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        Ok(self.lock()?.rows.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        Ok(self.lock()?.rows.iter().find(|e| e.email == email).cloned())
    }

    async fn find_by_email_and_name(
        &self,
        email: &str,
        name: &str,
    ) -> AppResult<Option<Employee>> {
        Ok(self
            .lock()?
            .rows
            .iter()
            .find(|e| e.email == email && e.name == name)
            .cloned())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<u64> {
        let mut inner = self.lock()?;
        let before = inner.rows.len();
        inner.rows.retain(|e| e.id != id);
        Ok((before - inner.rows.len()) as u64)
    }

    async fn find_page(&self, page: PageRequest) -> AppResult<(Vec<Employee>, i64)> {
        let inner = self.lock()?;
        let total = inner.rows.len() as i64;
        let mut rows = inner.rows.clone();
        drop(inner);

        sort_rows(&mut rows, page.sort_field, page.sort_direction);
        let rows = rows
            .into_iter()
            .skip(page.offset().max(0) as usize)
            .take(page.page_size.max(0) as usize)
            .collect();
        Ok((rows, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(name: &str, age: i32, email: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            age,
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = InMemoryEmployeeStore::new();
        let first = store
            .insert(new_employee("Vedha", 23, "vedha@gmail.com"))
            .await
            .unwrap();
        let second = store
            .insert(new_employee("Arun", 30, "arun@gmail.com"))
            .await
            .unwrap();
        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.name, "Vedha");
        assert_eq!(first.age, 23);
        assert_eq!(first.email, "vedha@gmail.com");
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_email() {
        let store = InMemoryEmployeeStore::new();
        store
            .insert(new_employee("Vedha", 23, "vedha@gmail.com"))
            .await
            .unwrap();
        let result = store
            .insert(new_employee("Other", 40, "vedha@gmail.com"))
            .await;
        assert!(matches!(result, Err(AppError::Duplicate { .. })));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_overlays_fields_and_preserves_id() {
        let store = InMemoryEmployeeStore::new();
        let created = store
            .insert(new_employee("Vedha", 22, "vedha@gmail.com"))
            .await
            .unwrap();
        let updated = store
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
    async fn update_missing_row_is_not_found() {
        let store = InMemoryEmployeeStore::new();
        let result = store
            .update(
                99,
                EmployeeChanges {
                    name: "Nobody".to_string(),
                    age: 1,
                    email: "nobody@gmail.com".to_string(),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_rejects_email_taken_by_another_row() {
        let store = InMemoryEmployeeStore::new();
        let first = store
            .insert(new_employee("Vedha", 23, "vedha@gmail.com"))
            .await
            .unwrap();
        store
            .insert(new_employee("Arun", 30, "arun@gmail.com"))
            .await
            .unwrap();
        let result = store
            .update(
                first.id,
                EmployeeChanges {
                    name: "Vedha".to_string(),
                    age: 23,
                    email: "arun@gmail.com".to_string(),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryEmployeeStore::new();
        let created = store
            .insert(new_employee("Vedha", 23, "vedha@gmail.com"))
            .await
            .unwrap();
        assert_eq!(store.delete_by_id(created.id).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(created.id).await.unwrap(), 0);
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_email_and_name_requires_both_matches() {
        let store = InMemoryEmployeeStore::new();
        store
            .insert(new_employee("Vedha", 23, "vedha@gmail.com"))
            .await
            .unwrap();
        assert!(
            store
                .find_by_email_and_name("vedha@gmail.com", "Vedha")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            store
                .find_by_email_and_name("vedha@gmail.com", "Arun")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn find_page_orders_and_bounds() {
        let store = InMemoryEmployeeStore::new();
        for (name, age) in [("Charlie", 35), ("Alice", 28), ("Bob", 42)] {
            store
                .insert(new_employee(
                    name,
                    age,
                    &format!("{}@gmail.com", name.to_lowercase()),
                ))
                .await
                .unwrap();
        }

        let (rows, total) = store
            .find_page(PageRequest {
                page_number: 0,
                page_size: 2,
                sort_field: SortField::Name,
                sort_direction: SortDirection::Asc,
            })
            .await
            .unwrap();
        assert_eq!(total, 3);
        let names: Vec<_> = rows.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        let (rows, _) = store
            .find_page(PageRequest {
                page_number: 0,
                page_size: 3,
                sort_field: SortField::Age,
                sort_direction: SortDirection::Desc,
            })
            .await
            .unwrap();
        let ages: Vec<_> = rows.iter().map(|e| e.age).collect();
        assert_eq!(ages, vec![42, 35, 28]);

        let (rows, total) = store
            .find_page(PageRequest {
                page_number: 1,
                page_size: 2,
                sort_field: SortField::Name,
                sort_direction: SortDirection::Asc,
            })
            .await
            .unwrap();
        assert_eq!(total, 3);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Charlie");
    }
}
