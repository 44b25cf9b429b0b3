//! Products API routes

use axum::Router;
use domain_products::{handlers, MongoProductRepository, ProductService};

use crate::state::AppState;

/// Create products router over the configured collection and variant
pub fn router(state: &AppState) -> Router {
    let repository =
        MongoProductRepository::with_collection(&state.db, &state.config.products.collection);
    let service = ProductService::new(repository);
    handlers::router(service, state.config.products.variant)
}
