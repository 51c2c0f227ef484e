use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::employees::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LogRangeParams {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

pub async fn handle(State(state): State<AppState>, Path(email): Path<String>) -> impl IntoResponse {
    match state.status_log_handler.handle(&email).await {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_between(
    State(state): State<AppState>,
    params: Result<Query<LogRangeParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(range) = match params {
        Ok(p) => p,
        Err(e) => return ApplicationError::Validation(e.body_text()).into_response(),
    };
    match state.status_log_handler.handle_between(range.from, range.to).await {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => err.into_response(),
    }
}
