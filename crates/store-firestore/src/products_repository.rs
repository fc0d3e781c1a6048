use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use pricelens_core::constants::PRODUCTS_COLLECTION;
use pricelens_core::products::{Product, ProductRepositoryTrait};
use pricelens_core::Result;

use crate::client::FirestoreClient;
use crate::values::{Document, FieldsBuilder};

/// Product catalog persisted in the `products` collection, one document
/// per barcode.
pub struct FirestoreProductRepository {
    client: Arc<FirestoreClient>,
}

impl FirestoreProductRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self { client }
    }

    fn decode_product(document: &Document) -> Option<Product> {
        let barcode = document.id()?.to_string();
        let name = document
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let brand = document
            .get("brand")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let description = document
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let quantity = document
            .get("quantity")
            .and_then(|v| v.as_decimal())
            .unwrap_or(Decimal::ZERO);
        // An unknown unit string degrades to the default unit instead of
        // dropping the product.
        let unit = document
            .get("unit")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Some(Product {
            barcode,
            name,
            brand,
            description,
            quantity,
            unit,
        })
    }

    fn encode_product(product: &Product) -> Document {
        Document::with_fields(
            FieldsBuilder::new()
                .string("name", &product.name)
                .string("brand", &product.brand)
                .string("description", &product.description)
                .decimal("quantity", product.quantity)
                .string("unit", product.unit.as_str())
                .timestamp("timestamp", Utc::now())
                .build(),
        )
    }
}

#[async_trait]
impl ProductRepositoryTrait for FirestoreProductRepository {
    async fn get_product(&self, barcode: &str) -> Result<Option<Product>> {
        let document = self
            .client
            .get_document(PRODUCTS_COLLECTION, barcode)
            .await?;
        Ok(document.as_ref().and_then(Self::decode_product))
    }

    async fn save_product(&self, product: &Product) -> Result<()> {
        let document = Self::encode_product(product);
        self.client
            .set_document(PRODUCTS_COLLECTION, &product.barcode, &document)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricelens_core::products::Unit;
    use rust_decimal_macros::dec;

    #[test]
    fn decodes_a_product_with_unknown_unit_fallback() {
        let document: Document = serde_json::from_value(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/products/7891000100103",
            "fields": {
                "name": {"stringValue": "Arroz"},
                "brand": {"stringValue": "Tio Joao"},
                "quantity": {"doubleValue": 5.0},
                "unit": {"stringValue": "gallon"}
            }
        }))
        .unwrap();

        let product = FirestoreProductRepository::decode_product(&document).unwrap();
        assert_eq!(product.barcode, "7891000100103");
        assert_eq!(product.quantity, dec!(5));
        assert_eq!(product.unit, Unit::Un);
        assert_eq!(product.description, "");
    }

    #[test]
    fn encoded_product_carries_its_unit_string() {
        let product = Product {
            barcode: "789".to_string(),
            name: "Leite".to_string(),
            brand: String::new(),
            description: String::new(),
            quantity: dec!(1),
            unit: Unit::L,
        };

        let document = FirestoreProductRepository::encode_product(&product);
        assert_eq!(document.get("unit").unwrap().as_str(), Some("l"));
        assert!(document.get("timestamp").unwrap().as_timestamp().is_some());
    }
}
