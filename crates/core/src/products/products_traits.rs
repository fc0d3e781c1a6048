use async_trait::async_trait;

use super::products_model::Product;
use crate::Result;

/// Trait defining the contract for product repository operations.
#[async_trait]
pub trait ProductRepositoryTrait: Send + Sync {
    async fn get_product(&self, barcode: &str) -> Result<Option<Product>>;
    async fn save_product(&self, product: &Product) -> Result<()>;
}

/// Trait defining the contract for product catalog operations.
#[async_trait]
pub trait ProductServiceTrait: Send + Sync {
    async fn lookup(&self, barcode: &str) -> Result<Option<Product>>;
    async fn register(&self, product: Product) -> Result<Product>;
}
