use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::modules::employees::core::employee::StatusChangeLogEntry;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlStatusLogEntry {
    pub entry_id: String,
    pub employee_email: String,
    pub name: String,
    pub status: String,
    pub default_status: String,
    pub message: String,
    pub date_modified: String,
}

impl From<StatusChangeLogEntry> for GqlStatusLogEntry {
    fn from(e: StatusChangeLogEntry) -> Self {
        Self {
            entry_id: e.entry_id,
            employee_email: e.employee_email,
            name: e.name,
            status: e.status.to_string(),
            default_status: e.default_status.to_string(),
            message: e.message,
            date_modified: e.date_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Default)]
pub struct StatusLogQuery;

#[Object]
impl StatusLogQuery {
    async fn status_log(
        &self,
        context: &Context<'_>,
        email: String,
    ) -> GqlResult<Vec<GqlStatusLogEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entries = state
            .status_log_handler
            .handle(&email)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    /// RFC 3339 bounds, both inclusive.
    async fn status_log_between(
        &self,
        context: &Context<'_>,
        from: String,
        to: String,
    ) -> GqlResult<Vec<GqlStatusLogEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entries = state
            .status_log_handler
            .handle_between(parse_instant(&from)?, parse_instant(&to)?)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}

fn parse_instant(value: &str) -> GqlResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| async_graphql::Error::new(format!("invalid instant {value:?}: {e}")))
}
