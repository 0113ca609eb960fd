//! Order Items API - REST façade over the order-management service

use axum_helpers::{create_cors_layer, create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        upstream = %config.upstream.base_url,
        timeout = ?config.upstream.timeout,
        "Configuration loaded"
    );

    let state = AppState::new(config)?;

    let cors = state
        .config
        .cors_allowed_origin
        .as_deref()
        .map(create_cors_layer)
        .transpose()?;

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, cors);

    let server_config = state.config.server.clone();
    info!("Starting Order Items API on port {}", server_config.port);

    create_production_app(
        router,
        &server_config,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: releasing upstream connection pool");
            drop(state);
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Order Items API shutdown complete");
    Ok(())
}
