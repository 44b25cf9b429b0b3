//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(products::router(state))
        .merge(health::router(state.clone()))
}

/// Routes plus docs, fallback and the shared middleware stack
pub fn app(state: &AppState) -> std::io::Result<Router> {
    axum_helpers::create_router::<ApiDoc>(routes(state), state.config.openapi_enabled)
}
