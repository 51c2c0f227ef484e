use crate::modules::employees::adapters::outbound::employee_store::{EmployeeStore, StoreError};
use crate::modules::employees::core::employee::{Employee, EmployeeView, StatusChangeLogEntry};
use crate::modules::employees::use_cases::errors::ApplicationError;
use crate::modules::employees::use_cases::register_employee::command::RegisterEmployee;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct RegisterEmployeeHandler<TStore>
where
    TStore: EmployeeStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterEmployeeHandler<TStore>
where
    TStore: EmployeeStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RegisterEmployee) -> Result<EmployeeView, ApplicationError> {
        let name = command.name.trim();
        if name.is_empty() {
            return Err(ApplicationError::Validation("name must not be empty".into()));
        }
        let email = command.email.trim();
        if !is_valid_email(email) {
            return Err(ApplicationError::Validation(format!(
                "not a valid email address: {email}"
            )));
        }

        let employee = Employee {
            id: Uuid::now_v7().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            status: command.status,
            default_status: command.default_status.unwrap_or(command.status),
            message: String::new(),
            date_modified: command.requested_at,
        };

        let created = self.store.insert(employee).await.map_err(|err| match err {
            StoreError::Duplicate { email } => ApplicationError::Conflict(email),
            other => ApplicationError::Store(other),
        })?;
        self.store
            .append_log(StatusChangeLogEntry::from(&created))
            .await?;

        info!(email = %created.email, id = %created.id, "employee registered");
        Ok(created.into())
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
