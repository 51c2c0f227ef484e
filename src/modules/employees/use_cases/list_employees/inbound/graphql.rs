use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::employees::core::employee::EmployeeView;
use crate::modules::employees::use_cases::list_employees::handler::EmployeeFilter;
use crate::modules::employees::use_cases::list_employees::inbound::http::ListEmployeesParams;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEmployee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status_type: String,
    pub default_status: String,
    pub is_default: bool,
    pub message: String,
}

impl From<EmployeeView> for GqlEmployee {
    fn from(v: EmployeeView) -> Self {
        Self {
            id: v.id,
            name: v.name,
            email: v.email,
            status_type: v.status.status_type.to_string(),
            default_status: v.status.default_status.to_string(),
            is_default: v.status.is_default,
            message: v.message,
        }
    }
}

#[derive(Default)]
pub struct ListEmployeesQuery;

#[Object]
impl ListEmployeesQuery {
    async fn employees(
        &self,
        context: &Context<'_>,
        status: Option<String>,
        name: Option<String>,
    ) -> GqlResult<Vec<GqlEmployee>> {
        let state = context.data_unchecked::<AppState>();
        let filter = EmployeeFilter::try_from(ListEmployeesParams { status, name })
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let listed = state
            .list_handler
            .handle_filtered(Utc::now(), &filter)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(listed.employees.into_iter().map(Into::into).collect())
    }
}
