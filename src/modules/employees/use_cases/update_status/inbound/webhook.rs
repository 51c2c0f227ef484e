// Chat integration entry point.
//
// The command token picks the status. An optional text payload becomes a
// command invocation: a new default status or a message, depending on
// `commandType`, or always a message in message only mode. An unknown
// `commandType` is ignored and the status still applies.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::modules::employees::core::commands::{
    CommandInvocation, CommandType, map_command_to_status,
};
use crate::modules::employees::use_cases::update_status::command::UpdateStatus;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookBody {
    pub email: String,
    pub command: String,
    pub command_type: Option<String>,
    pub text: Option<String>,
}

impl WebhookBody {
    fn into_command(self) -> UpdateStatus {
        let command_type = self
            .command_type
            .as_deref()
            .and_then(CommandType::from_wire)
            .unwrap_or(CommandType::SetStatus);
        UpdateStatus {
            status: map_command_to_status(&self.command),
            invocation: self.text.map(|value| CommandInvocation {
                command_type,
                value,
            }),
            email: self.email,
            requested_at: Utc::now(),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(source): Path<String>,
    body: Result<Json<WebhookBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    info!(%source, email = %body.email, command = %body.command, "webhook command received");
    match state.update_handler.handle(body.into_command()).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => err.into_response(),
    }
}
