use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Read access to the product collection
///
/// Implementations surface transport and query failures as
/// [`ProductError::Database`](crate::error::ProductError::Database).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in the store's natural order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by its storage key; `Ok(None)` when absent
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;
}
