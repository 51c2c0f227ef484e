// Lists employees with their status as of "now".
//
// Expired statuses are rolled over before they are returned. The rolled over
// values are written back through the update handler on a detached task, so
// the caller never waits on, or sees failures from, those writes.
//
// A filter narrows the list. The status filter applies to the status as of
// "now", so a record that rolls over into or out of it is judged after rollover.

use crate::modules::employees::adapters::outbound::employee_store::{EmployeeStore, StoreError};
use crate::modules::employees::core::employee::{Employee, EmployeeView};
use crate::modules::employees::core::policy::StatusPolicy;
use crate::modules::employees::core::resolve_expiry::resolve_expiry;
use crate::modules::employees::core::status::StatusValue;
use crate::modules::employees::use_cases::errors::ApplicationError;
use crate::modules::employees::use_cases::update_status::command::UpdateStatus;
use crate::modules::employees::use_cases::update_status::decide::decide_update;
use crate::modules::employees::use_cases::update_status::handler::UpdateStatusHandler;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionFailure {
    pub email: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionReport {
    pub corrected: Vec<String>,
    pub failed: Vec<CorrectionFailure>,
}

/// Handle on the write-back of expired statuses. Dropping it detaches the task.
#[derive(Debug)]
pub struct BackgroundCorrection {
    handle: Option<JoinHandle<CorrectionReport>>,
}

impl BackgroundCorrection {
    fn idle() -> Self {
        Self { handle: None }
    }

    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }

    pub async fn join(self) -> Result<CorrectionReport, JoinError> {
        match self.handle {
            Some(handle) => handle.await,
            None => Ok(CorrectionReport::default()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub status: Option<StatusValue>,
    pub name: Option<String>,
}

pub struct ListedEmployees {
    pub employees: Vec<EmployeeView>,
    pub correction: BackgroundCorrection,
}

pub struct ListEmployeesHandler<TStore>
where
    TStore: EmployeeStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    updater: Arc<UpdateStatusHandler<TStore>>,
    policy: Arc<StatusPolicy>,
}

impl<TStore> ListEmployeesHandler<TStore>
where
    TStore: EmployeeStore + Send + Sync + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        updater: Arc<UpdateStatusHandler<TStore>>,
        policy: Arc<StatusPolicy>,
    ) -> Self {
        Self {
            store,
            updater,
            policy,
        }
    }

    pub async fn handle(&self, now: DateTime<Utc>) -> Result<ListedEmployees, ApplicationError> {
        self.handle_filtered(now, &EmployeeFilter::default()).await
    }

    pub async fn handle_filtered(
        &self,
        now: DateTime<Utc>,
        filter: &EmployeeFilter,
    ) -> Result<ListedEmployees, ApplicationError> {
        let employees = self.candidates(filter).await?;

        let mut views = Vec::with_capacity(employees.len());
        let mut corrections = Vec::new();
        for employee in employees {
            let resolved = resolve_expiry(employee, now, &self.policy);
            if resolved.expired {
                let correction = UpdateStatus {
                    email: resolved.employee.email.clone(),
                    status: resolved.employee.status,
                    invocation: None,
                    requested_at: now,
                };
                // Show exactly what the write-back will persist.
                let corrected: Employee = decide_update(&resolved.employee, &correction, &self.policy);
                if filter.status.is_none_or(|status| status == corrected.status) {
                    views.push(EmployeeView::from(corrected));
                }
                corrections.push(correction);
            } else if filter.status.is_none_or(|status| status == resolved.employee.status) {
                views.push(EmployeeView::from(resolved.employee));
            }
        }

        Ok(ListedEmployees {
            employees: views,
            correction: self.spawn_corrections(corrections),
        })
    }

    async fn candidates(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, StoreError> {
        match (&filter.name, filter.status) {
            (Some(name), _) => self.store.find_by_name(name).await,
            (None, Some(status)) if !self.policy.may_roll_over_into(status) => {
                self.store.find_by_status(status).await
            }
            _ => self.store.find_all().await,
        }
    }

    fn spawn_corrections(&self, corrections: Vec<UpdateStatus>) -> BackgroundCorrection {
        if corrections.is_empty() {
            return BackgroundCorrection::idle();
        }

        info!(count = corrections.len(), "rolling over expired statuses in background");
        let updater = Arc::clone(&self.updater);
        let handle = tokio::spawn(async move {
            let mut report = CorrectionReport::default();
            for correction in corrections {
                let email = correction.email.clone();
                let status = correction.status;
                match updater.handle(correction).await {
                    Ok(_) => {
                        debug!(%email, %status, "expired status rolled over");
                        report.corrected.push(email);
                    }
                    Err(err) => {
                        error!(%email, %status, error = %err, "failed to roll over expired status");
                        report.failed.push(CorrectionFailure {
                            email,
                            reason: err.to_string(),
                        });
                    }
                }
            }
            report
        });
        BackgroundCorrection {
            handle: Some(handle),
        }
    }
}
