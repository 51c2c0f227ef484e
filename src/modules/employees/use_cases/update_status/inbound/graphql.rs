use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::employees::core::status::StatusValue;
use crate::modules::employees::use_cases::list_employees::inbound::graphql::GqlEmployee;
use crate::modules::employees::use_cases::update_status::command::UpdateStatus;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateStatusMutation;

#[Object]
impl UpdateStatusMutation {
    async fn update_status(
        &self,
        context: &Context<'_>,
        email: String,
        status: String,
    ) -> GqlResult<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();

        let command = UpdateStatus {
            email,
            status: status.parse::<StatusValue>()?,
            invocation: None,
            requested_at: Utc::now(),
        };

        let view = state
            .update_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }
}
