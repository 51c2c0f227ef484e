use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::employees::core::status::StatusValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: StatusValue,
    pub default_status: StatusValue,
    #[serde(default)]
    pub message: String,
    pub date_modified: DateTime<Utc>,
}

/// Immutable record of one status write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeLogEntry {
    pub entry_id: String,
    pub employee_email: String,
    pub name: String,
    pub status: StatusValue,
    pub default_status: StatusValue,
    pub message: String,
    pub date_modified: DateTime<Utc>,
}

impl StatusChangeLogEntry {
    /// `"{email}/{timestamp}"`, sortable per employee.
    pub fn entry_id_for(email: &str, date_modified: &DateTime<Utc>) -> String {
        format!(
            "{email}/{}",
            date_modified.to_rfc3339_opts(SecondsFormat::Micros, true)
        )
    }
}

impl From<&Employee> for StatusChangeLogEntry {
    fn from(employee: &Employee) -> Self {
        Self {
            entry_id: Self::entry_id_for(&employee.email, &employee.date_modified),
            employee_email: employee.email.clone(),
            name: employee.name.clone(),
            status: employee.status,
            default_status: employee.default_status,
            message: employee.message.clone(),
            date_modified: employee.date_modified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStatusView {
    pub status_type: StatusValue,
    pub default_status: StatusValue,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: EmployeeStatusView,
    pub message: String,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            status: EmployeeStatusView {
                status_type: employee.status,
                default_status: employee.default_status,
                is_default: employee.status == employee.default_status,
            },
            message: employee.message,
        }
    }
}
