use chrono::{DateTime, Utc};

use crate::modules::employees::core::commands::CommandInvocation;
use crate::modules::employees::core::status::StatusValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatus {
    pub email: String,
    pub status: StatusValue,
    pub invocation: Option<CommandInvocation>,
    pub requested_at: DateTime<Utc>,
}
