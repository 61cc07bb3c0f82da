use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};

use roster::router::init_router;
use roster::state::init_app_state;
use roster_config::{LoggingConfig, ServerConfig};
use roster_observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing(&LoggingConfig::from_env()?);

    let server_config = ServerConfig::from_env()?;
    let state = init_app_state()?;
    info!(
        id_allocation = %state.store.id_allocation(),
        token_validation = %state.jwt_config.validation,
        "Configuration loaded"
    );

    let app = init_router(state);

    let listener = TcpListener::bind(server_config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", server_config.bind_address()))?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
