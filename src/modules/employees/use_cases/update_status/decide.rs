// Pure decision function for a status update.
//
// Responsibilities
// - Stamp the new status with the request time and clear the message.
// - Apply the optional command: a new default status or a message.
// - In message only mode any command value is taken as the message.
// - Never perform input or output.

use crate::modules::employees::core::commands::CommandType;
use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::policy::StatusPolicy;
use crate::modules::employees::core::status::StatusValue;
use crate::modules::employees::use_cases::update_status::command::UpdateStatus;

pub fn decide_update(employee: &Employee, command: &UpdateStatus, policy: &StatusPolicy) -> Employee {
    let mut updated = Employee {
        status: command.status,
        date_modified: command.requested_at,
        message: String::new(),
        ..employee.clone()
    };

    let Some(invocation) = &command.invocation else {
        return updated;
    };

    if policy.message_only {
        updated.message = invocation.value.clone();
        return updated;
    }

    match invocation.command_type {
        CommandType::SetDefault if policy.allow_defaults => {
            // An unknown value leaves the default untouched.
            if let Ok(default_status) = invocation.value.parse::<StatusValue>() {
                updated.default_status = default_status;
            }
        }
        CommandType::SetMessage => updated.message = invocation.value.clone(),
        CommandType::SetDefault | CommandType::SetStatus => {}
    }
    updated
}
