use serde::{Deserialize, Serialize};

use crate::modules::employees::core::status::StatusValue;

/// What a command does beyond setting the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandType {
    #[serde(rename = "set-status")]
    SetStatus,
    #[serde(rename = "set-default")]
    SetDefault,
    #[serde(rename = "set-message")]
    SetMessage,
}

impl CommandType {
    /// Reads a wire name. Anything unrecognised is `None`.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value.trim() {
            "set-status" => Some(Self::SetStatus),
            "set-default" => Some(Self::SetDefault),
            "set-message" => Some(Self::SetMessage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub command_type: CommandType,
    pub value: String,
}

/// Maps a chat command token (`wfh`, `/ooo`, ...) to a status. Unknown
/// tokens mean "in office".
pub fn map_command_to_status(command: &str) -> StatusValue {
    let token = command.trim().trim_start_matches('/').to_ascii_lowercase();
    match token.as_str() {
        "wfh" | "wfhtest" => StatusValue::Wfh,
        "wfo" | "wfotest" => StatusValue::InOffice,
        "ooo" => StatusValue::OutOfOffice,
        "vacation" => StatusValue::Vacation,
        "sick" => StatusValue::Sick,
        _ => StatusValue::InOffice,
    }
}
