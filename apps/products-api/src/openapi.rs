//! OpenAPI documentation configuration

use utoipa::{Modify, OpenApi};

/// Folds the catalog endpoints from the domain crate into this document
struct CatalogPaths;

impl Modify for CatalogPaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.merge(domain_products::ApiDoc::openapi());
    }
}

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Read-only product catalog, served over HTTP or AWS Lambda",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(crate::api::health::health_check, crate::api::health::ready),
    modifiers(&CatalogPaths),
    tags(
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
