//! Product Service - read operations over the catalog

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, NEW_PRODUCTS_LIMIT};
use crate::repository::ProductRepository;

/// Product service providing the catalog read operations
///
/// Each call is a single repository read; failures are returned as-is
/// and never retried.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by its storage key
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// The first [`NEW_PRODUCTS_LIMIT`] products in store order
    #[instrument(skip(self))]
    pub async fn list_new_products(&self) -> ProductResult<Vec<Product>> {
        let mut products = self.repository.list().await?;
        products.truncate(NEW_PRODUCTS_LIMIT);
        Ok(products)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
