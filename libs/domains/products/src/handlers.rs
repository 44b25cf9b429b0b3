//! HTTP handlers for the product catalog

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{ErrorResponse, InternalServerErrorResponse, NotFoundResponse};
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{ApiVariant, Product};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the catalog endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product, list_new_products),
    components(
        schemas(Product, ErrorResponse),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Read-only product catalog")
    )
)]
pub struct ApiDoc;

/// Create the products router for the given variant.
///
/// `ApiVariant::ListOnly` mounts `/products` alone; other paths are left to
/// the application's fallback.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    variant: ApiVariant,
) -> Router {
    let shared_service = Arc::new(service);

    let mut router: Router<Arc<ProductService<R>>> =
        Router::new().route("/products", get(list_products::<R>));

    if variant.serves_lookups() {
        router = router
            .route("/product/{id}", get(get_product::<R>))
            .route("/new-products", get(list_new_products::<R>));
    }

    router.with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products in store order", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    info!("List products");
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get a product by its storage key
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Storage key of the product")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    info!(product_id = %id, "Get product");
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// List the newest products (first four in store order)
#[utoipa::path(
    get,
    path = "/new-products",
    tag = "Products",
    responses(
        (status = 200, description = "Up to four products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_new_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    info!("List new products");
    let products = service.list_new_products().await?;
    Ok(Json(products))
}
