use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::employees::core::status::StatusValue;
use crate::modules::employees::use_cases::errors::ApplicationError;
use crate::modules::employees::use_cases::register_employee::command::RegisterEmployee;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployeeBody {
    pub name: String,
    pub email: String,
    pub status: String,
    pub default_status: Option<String>,
}

impl RegisterEmployeeBody {
    fn into_command(self) -> Result<RegisterEmployee, ApplicationError> {
        let status = parse_status(&self.status)?;
        let default_status = self.default_status.as_deref().map(parse_status).transpose()?;
        Ok(RegisterEmployee {
            name: self.name,
            email: self.email,
            status,
            default_status,
            requested_at: Utc::now(),
        })
    }
}

fn parse_status(raw: &str) -> Result<StatusValue, ApplicationError> {
    raw.parse::<StatusValue>()
        .map_err(|e| ApplicationError::Validation(e.to_string()))
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterEmployeeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = match body.into_command() {
        Ok(command) => command,
        Err(err) => return err.into_response(),
    };

    match state.register_handler.handle(command).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => err.into_response(),
    }
}
