use chrono::{DateTime, Utc};

use crate::modules::employees::core::status::StatusValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEmployee {
    pub name: String,
    pub email: String,
    pub status: StatusValue,
    /// Falls back to `status` when absent.
    pub default_status: Option<StatusValue>,
    pub requested_at: DateTime<Utc>,
}
