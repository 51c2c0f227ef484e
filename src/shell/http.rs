use axum::{
    Extension, Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::employees::use_cases::list_employees::inbound::http as list_http;
use crate::modules::employees::use_cases::list_status_log::inbound::http as status_log_http;
use crate::modules::employees::use_cases::register_employee::inbound::http as register_http;
use crate::modules::employees::use_cases::update_status::inbound::http as update_http;
use crate::modules::employees::use_cases::update_status::inbound::webhook;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route(
            "/employees",
            get(list_http::handle).post(register_http::handle),
        )
        .route("/employees/status", put(update_http::handle))
        .route("/employees/{email}/log", get(status_log_http::handle))
        .route("/status-log", get(status_log_http::handle_between))
        .route("/webhooks/{source}", post(webhook::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
