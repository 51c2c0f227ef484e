use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::employees::core::status::StatusValue;
use crate::modules::employees::use_cases::errors::ApplicationError;
use crate::modules::employees::use_cases::update_status::command::UpdateStatus;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateStatusBody {
    pub email: String,
    pub status: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let status = match body.status.parse::<StatusValue>() {
        Ok(status) => status,
        Err(e) => return ApplicationError::Validation(e.to_string()).into_response(),
    };

    let command = UpdateStatus {
        email: body.email,
        status,
        invocation: None,
        requested_at: Utc::now(),
    };

    match state.update_handler.handle(command).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => err.into_response(),
    }
}
