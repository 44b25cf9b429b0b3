//! Products API - read-only catalog over HTTP or AWS Lambda

use axum_helpers::server::{create_production_app, run_lambda};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, RuntimeMode};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        environment = config.environment.as_str(),
        variant = %config.products.variant,
        runtime = %config.runtime_mode,
        "Starting Products API"
    );

    // Lazy unless MONGODB_VERIFY_ON_STARTUP is set
    let mongo_client = database::mongodb::connect_for_startup(&config.mongodb).await?;

    info!(
        database = config.mongodb.database(),
        collection = %config.products.collection,
        "MongoDB client ready"
    );

    let state = AppState::new(config, mongo_client);
    let router = api::app(&state)?;

    match state.config.runtime_mode {
        RuntimeMode::Lambda => {
            run_lambda(router)
                .await
                .map_err(|e| eyre::eyre!("Lambda runtime error: {}", e))?;
        }
        RuntimeMode::Server => {
            let mongo_client = state.mongo_client.clone();
            create_production_app(
                router,
                &state.config.server,
                Duration::from_secs(30),
                async move {
                    info!("Shutting down: closing MongoDB connections");
                    mongo_client.shutdown().await;
                    info!("MongoDB connection closed");
                },
            )
            .await
            .map_err(|e| eyre::eyre!("Server error: {}", e))?;
        }
    }

    info!("Products API shutdown complete");
    Ok(())
}
