use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::modules::employees::core::employee::{Employee, StatusChangeLogEntry};
use crate::modules::employees::core::status::StatusValue;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("employee already registered: {email}")]
    Duplicate { email: String },

    #[error("status log entry already exists: {entry_id}")]
    DuplicateLogEntry { entry_id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Durable state for employees and their append-only status log.
///
/// Writes to the same email are last-write-wins; callers get no mutual
/// exclusion across concurrent updates.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError>;
    /// Records by their stored status, before any rollover.
    async fn find_by_status(&self, status: StatusValue) -> Result<Vec<Employee>, StoreError>;
    /// Exact match; names are not unique.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Employee>, StoreError>;
    /// Creates a new record; fails with `Duplicate` when the email is taken.
    async fn insert(&self, employee: Employee) -> Result<Employee, StoreError>;
    /// Replaces the record stored under `employee.email`.
    async fn save(&self, employee: Employee) -> Result<Employee, StoreError>;
    async fn append_log(&self, entry: StatusChangeLogEntry) -> Result<(), StoreError>;
    /// Oldest first.
    async fn list_log_by_email(&self, email: &str)
    -> Result<Vec<StatusChangeLogEntry>, StoreError>;
    /// Entries of every employee with `from <= date_modified <= to`, oldest first.
    async fn list_log_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<StatusChangeLogEntry>, StoreError>;
}
