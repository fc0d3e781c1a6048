use std::sync::Arc;

use log::debug;

use super::products_errors::ProductError;
use super::products_model::Product;
use super::products_traits::{ProductRepositoryTrait, ProductServiceTrait};
use crate::Result;

/// Service for the product catalog.
pub struct ProductService {
    product_repository: Arc<dyn ProductRepositoryTrait>,
}

impl ProductService {
    pub fn new(product_repository: Arc<dyn ProductRepositoryTrait>) -> Self {
        Self { product_repository }
    }
}

#[async_trait::async_trait]
impl ProductServiceTrait for ProductService {
    /// Looks a scanned barcode up in the catalog. `None` means the product
    /// is unknown and should be registered before readings are recorded.
    async fn lookup(&self, barcode: &str) -> Result<Option<Product>> {
        self.product_repository.get_product(barcode).await
    }

    /// Registers or updates a catalog entry.
    async fn register(&self, product: Product) -> Result<Product> {
        if product.barcode.trim().is_empty() {
            return Err(ProductError::MissingBarcode.into());
        }

        self.product_repository.save_product(&product).await?;
        debug!("Registered product {}", product.barcode);
        Ok(product)
    }
}
