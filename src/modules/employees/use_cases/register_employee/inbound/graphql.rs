use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::employees::core::status::StatusValue;
use crate::modules::employees::use_cases::list_employees::inbound::graphql::GqlEmployee;
use crate::modules::employees::use_cases::register_employee::command::RegisterEmployee;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterEmployeeMutation;

#[Object]
impl RegisterEmployeeMutation {
    async fn register_employee(
        &self,
        context: &Context<'_>,
        name: String,
        email: String,
        status: String,
        default_status: Option<String>,
    ) -> GqlResult<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();

        let status = status.parse::<StatusValue>()?;
        let default_status = default_status
            .as_deref()
            .map(str::parse::<StatusValue>)
            .transpose()?;

        let command = RegisterEmployee {
            name,
            email,
            status,
            default_status,
            requested_at: Utc::now(),
        };

        let view = state
            .register_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }
}
