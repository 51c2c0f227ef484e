use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::core::employee::StatusChangeLogEntry;
use crate::modules::employees::use_cases::errors::ApplicationError;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct ListStatusLogHandler<TStore>
where
    TStore: EmployeeStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListStatusLogHandler<TStore>
where
    TStore: EmployeeStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, email: &str) -> Result<Vec<StatusChangeLogEntry>, ApplicationError> {
        if self.store.find_by_email(email).await?.is_none() {
            return Err(ApplicationError::NotFound(email.to_string()));
        }
        Ok(self.store.list_log_by_email(email).await?)
    }

    /// Every employee's entries written between `from` and `to`, both inclusive.
    pub async fn handle_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<StatusChangeLogEntry>, ApplicationError> {
        if from > to {
            return Err(ApplicationError::Validation(format!(
                "range start {from} is after its end {to}"
            )));
        }
        Ok(self.store.list_log_between(from, to).await?)
    }
}
