use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of work-location statuses. The wire form is the variant name
/// (`WFH` for working from home).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusValue {
    #[serde(rename = "WFH")]
    Wfh,
    InOffice,
    OutOfOffice,
    Vacation,
    Sick,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("not a valid status type: {0}")]
pub struct InvalidStatus(pub String);

impl StatusValue {
    pub const ALL: [StatusValue; 5] = [
        StatusValue::Wfh,
        StatusValue::InOffice,
        StatusValue::OutOfOffice,
        StatusValue::Vacation,
        StatusValue::Sick,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusValue::Wfh => "WFH",
            StatusValue::InOffice => "InOffice",
            StatusValue::OutOfOffice => "OutOfOffice",
            StatusValue::Vacation => "Vacation",
            StatusValue::Sick => "Sick",
        }
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusValue {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusValue::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}
