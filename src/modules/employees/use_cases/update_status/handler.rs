use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::core::employee::{EmployeeView, StatusChangeLogEntry};
use crate::modules::employees::core::policy::StatusPolicy;
use crate::modules::employees::use_cases::errors::ApplicationError;
use crate::modules::employees::use_cases::update_status::command::UpdateStatus;
use crate::modules::employees::use_cases::update_status::decide::decide_update;
use std::sync::Arc;
use tracing::{error, info};

pub struct UpdateStatusHandler<TStore>
where
    TStore: EmployeeStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    policy: Arc<StatusPolicy>,
}

impl<TStore> UpdateStatusHandler<TStore>
where
    TStore: EmployeeStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, policy: Arc<StatusPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(&self, command: UpdateStatus) -> Result<EmployeeView, ApplicationError> {
        let employee = self
            .store
            .find_by_email(&command.email)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(command.email.clone()))?;

        let updated = decide_update(&employee, &command, &self.policy);
        let saved = self.store.save(updated).await?;
        // The record is already saved; a failed append leaves it without a log entry.
        let entry = StatusChangeLogEntry::from(&saved);
        let entry_id = entry.entry_id.clone();
        if let Err(err) = self.store.append_log(entry).await {
            error!(
                email = %saved.email,
                %entry_id,
                error = %err,
                "status saved but its log entry was not appended"
            );
            return Err(err.into());
        }

        info!(
            email = %saved.email,
            status = %saved.status,
            default_status = %saved.default_status,
            "status updated"
        );
        Ok(saved.into())
    }
}
