// Status lifecycle.
//
// A status set today is valid for the rest of today. A status set at or after
// the cutoff hour also covers the whole next day. Anything older rolls over,
// unless the status is rollover exempt. Never performs input or output.

use chrono::{DateTime, Timelike, Utc};

use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::policy::StatusPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEmployee {
    pub employee: Employee,
    pub expired: bool,
}

pub fn resolve_expiry(
    mut employee: Employee,
    now: DateTime<Utc>,
    policy: &StatusPolicy,
) -> ResolvedEmployee {
    if policy.is_rollover_exempt(employee.status)
        || is_fresh(&employee.date_modified, &now, policy)
    {
        return ResolvedEmployee {
            employee,
            expired: false,
        };
    }

    employee.status = policy.rollover_status(employee.default_status);
    ResolvedEmployee {
        employee,
        expired: true,
    }
}

fn is_fresh(date_modified: &DateTime<Utc>, now: &DateTime<Utc>, policy: &StatusPolicy) -> bool {
    let modified = date_modified.with_timezone(&policy.utc_offset);
    let current = now.with_timezone(&policy.utc_offset);
    let modified_day = modified.date_naive();
    let current_day = current.date_naive();

    // Same day, or a timestamp ahead of the clock.
    if modified_day >= current_day {
        return true;
    }

    modified.hour() >= policy.cutoff_hour && current_day.pred_opt() == Some(modified_day)
}
