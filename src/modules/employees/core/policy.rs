use chrono::{FixedOffset, Offset, Utc};

use crate::modules::employees::core::status::StatusValue;

pub const DEFAULT_CUTOFF_HOUR: u32 = 20;

/// Rules that govern how statuses expire and how commands are applied.
/// Built once from configuration and handed to every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPolicy {
    /// Hour of day from which a status stays valid through the next day.
    pub cutoff_hour: u32,
    /// Roll expired statuses over to the employee's own default status.
    pub allow_defaults: bool,
    /// Rollover target when `allow_defaults` is off.
    pub fallback_status: StatusValue,
    /// Statuses that never expire.
    pub rollover_exempt: Vec<StatusValue>,
    /// Treat any command payload as a plain message.
    pub message_only: bool,
    /// Offset used to decide calendar days and hours.
    pub utc_offset: FixedOffset,
}

impl StatusPolicy {
    pub fn is_rollover_exempt(&self, status: StatusValue) -> bool {
        self.rollover_exempt.contains(&status)
    }

    pub fn rollover_status(&self, default_status: StatusValue) -> StatusValue {
        if self.allow_defaults {
            default_status
        } else {
            self.fallback_status
        }
    }

    /// Whether an expired record stored under some other status can end up as
    /// `status`. When it cannot, the stored status alone answers "who is `status`".
    pub fn may_roll_over_into(&self, status: StatusValue) -> bool {
        self.allow_defaults || self.fallback_status == status
    }
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            cutoff_hour: DEFAULT_CUTOFF_HOUR,
            allow_defaults: true,
            fallback_status: StatusValue::InOffice,
            rollover_exempt: vec![StatusValue::Vacation, StatusValue::Sick],
            message_only: false,
            utc_offset: Utc.fix(),
        }
    }
}
