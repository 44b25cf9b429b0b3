//! Health check endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use core_config::Environment;
use serde_json::Value;
use tracing::info;

use crate::state::AppState;

/// Liveness text for the running environment
pub fn health_message(environment: &Environment) -> &'static str {
    match environment {
        Environment::Production => "Serverless Products API is running!",
        Environment::Development => "Serverless Products API (development) is running!",
    }
}

/// Liveness check; never touches the store
#[utoipa::path(
    get,
    path = "/health-check",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> &'static str {
    info!(environment = state.config.environment.as_str(), "Health check");
    health_message(&state.config.environment)
}

/// Readiness check: pings MongoDB
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Store reachable"),
        (status = 503, description = "Store unreachable")
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let client = state.mongo_client.clone();
    let database: HealthCheckFuture = Box::pin(async move {
        if database::mongodb::check_health(&client).await {
            Ok(())
        } else {
            Err("MongoDB ping failed".to_string())
        }
    });

    run_health_checks(vec![("database", database)]).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health-check", get(health_check))
        .route("/ready", get(ready))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_message_names_environment() {
        assert_eq!(
            health_message(&Environment::Production),
            "Serverless Products API is running!"
        );
        assert!(health_message(&Environment::Development).contains("development"));
    }
}
