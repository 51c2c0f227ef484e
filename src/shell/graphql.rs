use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::employees::use_cases::list_employees::inbound::graphql::ListEmployeesQuery;
use crate::modules::employees::use_cases::list_status_log::inbound::graphql::StatusLogQuery;
use crate::modules::employees::use_cases::register_employee::inbound::graphql::RegisterEmployeeMutation;
use crate::modules::employees::use_cases::update_status::inbound::graphql::UpdateStatusMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListEmployeesQuery, StatusLogQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RegisterEmployeeMutation, UpdateStatusMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
