use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use employee_status::modules::employees::adapters::outbound::employee_store_in_memory::InMemoryEmployeeStore;
use employee_status::shared::infrastructure::config::AppConfig;
use employee_status::shell::http::router;
use employee_status::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // In-memory store for now
    let store = Arc::new(InMemoryEmployeeStore::new());
    let state = AppState::new(store, config.policy.clone());
    let app = router(state);

    tracing::info!(
        cutoff_hour = config.policy.cutoff_hour,
        allow_defaults = config.policy.allow_defaults,
        message_only = config.policy.message_only,
        "status policy loaded"
    );
    tracing::info!("HTTP endpoint: http://{}/employees", config.bind_address);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_address);
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
