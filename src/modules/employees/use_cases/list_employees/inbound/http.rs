use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::employees::core::status::StatusValue;
use crate::modules::employees::use_cases::errors::ApplicationError;
use crate::modules::employees::use_cases::list_employees::handler::EmployeeFilter;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListEmployeesParams {
    pub status: Option<String>,
    pub name: Option<String>,
}

impl TryFrom<ListEmployeesParams> for EmployeeFilter {
    type Error = ApplicationError;

    fn try_from(params: ListEmployeesParams) -> Result<Self, Self::Error> {
        let status = params
            .status
            .map(|value| value.parse::<StatusValue>())
            .transpose()
            .map_err(|e| ApplicationError::Validation(e.to_string()))?;
        Ok(EmployeeFilter {
            status,
            name: params.name,
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListEmployeesParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(e) => return ApplicationError::Validation(e.body_text()).into_response(),
    };
    let filter = match EmployeeFilter::try_from(params) {
        Ok(filter) => filter,
        Err(err) => return err.into_response(),
    };

    match state.list_handler.handle_filtered(Utc::now(), &filter).await {
        // The write-back keeps running after the handle is dropped.
        Ok(listed) => Json(listed.employees).into_response(),
        Err(err) => err.into_response(),
    }
}
