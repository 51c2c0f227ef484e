// Configuration read from the environment at startup.
//
// Variables
// - BIND_ADDRESS               socket address to listen on (0.0.0.0:8080)
// - STATUS_CUTOFF_HOUR         0..=23, statuses set from this hour cover the next day (20)
// - STATUS_ALLOW_DEFAULTS      roll over to each employee's default status (true)
// - STATUS_FALLBACK            rollover status when defaults are disabled (InOffice)
// - STATUS_ROLLOVER_EXEMPT     comma separated statuses that never roll over (Vacation,Sick)
// - STATUS_MESSAGE_ONLY        treat command payloads as plain messages (false)
// - STATUS_UTC_OFFSET_MINUTES  offset used for calendar days, east positive (0)

use crate::modules::employees::core::policy::StatusPolicy;
use crate::modules::employees::core::status::StatusValue;
use chrono::FixedOffset;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    pub policy: StatusPolicy,
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = StatusPolicy::default();
        let read = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|value| (name, value))
        };

        let bind_address = match read("BIND_ADDRESS") {
            Some((name, value)) => parse_with(name, value, |v| v.parse::<SocketAddr>())?,
            None => DEFAULT_BIND_ADDRESS
                .parse()
                .map_err(|e: std::net::AddrParseError| invalid("BIND_ADDRESS", DEFAULT_BIND_ADDRESS, e))?,
        };

        let cutoff_hour = match read("STATUS_CUTOFF_HOUR") {
            Some((name, value)) => {
                let hour = parse_with(name, value.clone(), |v| v.parse::<u32>())?;
                if hour > 23 {
                    return Err(invalid(name, &value, "hour must be between 0 and 23"));
                }
                hour
            }
            None => defaults.cutoff_hour,
        };

        let allow_defaults = match read("STATUS_ALLOW_DEFAULTS") {
            Some((name, value)) => parse_bool(name, value)?,
            None => defaults.allow_defaults,
        };

        let fallback_status = match read("STATUS_FALLBACK") {
            Some((name, value)) => parse_with(name, value, |v| v.parse::<StatusValue>())?,
            None => defaults.fallback_status,
        };

        let rollover_exempt = match lookup("STATUS_ROLLOVER_EXEMPT") {
            // Set but empty means no exemptions.
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse::<StatusValue>()
                        .map_err(|e| invalid("STATUS_ROLLOVER_EXEMPT", &value, e))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.rollover_exempt,
        };

        let message_only = match read("STATUS_MESSAGE_ONLY") {
            Some((name, value)) => parse_bool(name, value)?,
            None => defaults.message_only,
        };

        let utc_offset = match read("STATUS_UTC_OFFSET_MINUTES") {
            Some((name, value)) => {
                let minutes = parse_with(name, value.clone(), |v| v.parse::<i32>())?;
                minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or_else(|| invalid(name, &value, "offset out of range"))?
            }
            None => defaults.utc_offset,
        };

        Ok(AppConfig {
            bind_address,
            policy: StatusPolicy {
                cutoff_hour,
                allow_defaults,
                fallback_status,
                rollover_exempt,
                message_only,
                utc_offset,
            },
        })
    }
}

fn invalid(name: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_with<T, E: ToString>(
    name: &'static str,
    value: String,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, ConfigError> {
    parse(&value).map_err(|e| invalid(name, &value, e))
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, &value, "expected a boolean")),
    }
}
