// In memory implementation of the EmployeeStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep employees keyed by email, and log entries keyed by entry id.
// - Allow simulating an unreachable or read only backend.

use crate::modules::employees::adapters::outbound::employee_store::{EmployeeStore, StoreError};
use crate::modules::employees::core::employee::{Employee, StatusChangeLogEntry};
use crate::modules::employees::core::status::StatusValue;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEmployeeStore {
    employees: RwLock<HashMap<String, Employee>>,
    log: RwLock<BTreeMap<String, StatusChangeLogEntry>>,
    is_offline: bool,
    is_read_only: bool,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn toggle_read_only(&mut self) {
        self.is_read_only = !self.is_read_only;
    }

    fn ensure_readable(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Employee store offline".into()));
        }
        Ok(())
    }

    fn ensure_writable(&self) -> Result<(), StoreError> {
        self.ensure_readable()?;
        if self.is_read_only {
            return Err(StoreError::Backend("Employee store is read only".into()));
        }
        Ok(())
    }

    async fn employees_where(&self, keep: impl Fn(&Employee) -> bool) -> Vec<Employee> {
        let mut employees: Vec<Employee> = self
            .employees
            .read()
            .await
            .values()
            .filter(|employee| keep(employee))
            .cloned()
            .collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.email.cmp(&b.email)));
        employees
    }

    async fn log_where(&self, keep: impl Fn(&StatusChangeLogEntry) -> bool) -> Vec<StatusChangeLogEntry> {
        let mut entries: Vec<StatusChangeLogEntry> = self
            .log
            .read()
            .await
            .values()
            .filter(|entry| keep(entry))
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            a.date_modified
                .cmp(&b.date_modified)
                .then_with(|| a.entry_id.cmp(&b.entry_id))
        });
        entries
    }
}

#[async_trait::async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        self.ensure_readable()?;
        Ok(self.employees_where(|_| true).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError> {
        self.ensure_readable()?;
        Ok(self.employees.read().await.get(email).cloned())
    }

    async fn find_by_status(&self, status: StatusValue) -> Result<Vec<Employee>, StoreError> {
        self.ensure_readable()?;
        Ok(self.employees_where(|employee| employee.status == status).await)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Employee>, StoreError> {
        self.ensure_readable()?;
        Ok(self.employees_where(|employee| employee.name == name).await)
    }

    async fn insert(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.ensure_writable()?;
        let mut guard = self.employees.write().await;
        if guard.contains_key(&employee.email) {
            return Err(StoreError::Duplicate {
                email: employee.email,
            });
        }
        guard.insert(employee.email.clone(), employee.clone());
        Ok(employee)
    }

    async fn save(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.ensure_writable()?;
        self.employees
            .write()
            .await
            .insert(employee.email.clone(), employee.clone());
        Ok(employee)
    }

    async fn append_log(&self, entry: StatusChangeLogEntry) -> Result<(), StoreError> {
        self.ensure_writable()?;
        let mut guard = self.log.write().await;
        if guard.contains_key(&entry.entry_id) {
            return Err(StoreError::DuplicateLogEntry {
                entry_id: entry.entry_id,
            });
        }
        guard.insert(entry.entry_id.clone(), entry);
        Ok(())
    }

    async fn list_log_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<StatusChangeLogEntry>, StoreError> {
        self.ensure_readable()?;
        Ok(self.log_where(|entry| entry.employee_email == email).await)
    }

    async fn list_log_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<StatusChangeLogEntry>, StoreError> {
        self.ensure_readable()?;
        Ok(self
            .log_where(|entry| entry.date_modified >= from && entry.date_modified <= to)
            .await)
    }
}
