use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pricelens_core::constants::READINGS_COLLECTION;
use pricelens_core::readings::{NewReading, Reading, ReadingRepositoryTrait};
use pricelens_core::Result;

use crate::client::{FirestoreClient, StructuredQuery};
use crate::values::{Document, FieldsBuilder, Value};

/// Scan readings persisted in the `readings` collection.
pub struct FirestoreReadingRepository {
    client: Arc<FirestoreClient>,
}

impl FirestoreReadingRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self { client }
    }

    fn decode_reading(document: &Document) -> Option<Reading> {
        let id = document.id()?.to_string();
        let product_code = document.get("code")?.as_str()?.to_string();
        let price = document.get("price").and_then(|v| v.as_decimal());
        let market_name = document
            .get("market")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let coordinate = document.get("geopoint").and_then(|v| v.as_geo_point());
        let timestamp = document.get("timestamp").and_then(|v| v.as_timestamp());
        // Older confirmed documents predate the flag; a price is as good
        // as an explicit confirmation.
        let confirmed = document
            .get("confirmed")
            .and_then(|v| v.as_bool())
            .unwrap_or(price.is_some());

        Some(Reading {
            id,
            product_code,
            price,
            market_name,
            coordinate,
            timestamp,
            confirmed,
        })
    }

    /// The write stamps the document with the current time, standing in
    /// for the server timestamp the app used to request.
    fn encode_reading(reading: &NewReading, timestamp: DateTime<Utc>) -> Document {
        let mut fields = FieldsBuilder::new()
            .string("code", &reading.product_code)
            .boolean("confirmed", reading.confirmed)
            .timestamp("timestamp", timestamp);

        if let Some(price) = reading.price {
            fields = fields.decimal("price", price);
        }
        if let Some(market) = &reading.market_name {
            fields = fields.string("market", market);
        }
        if let Some(coordinate) = &reading.coordinate {
            fields = fields.geo_point("geopoint", coordinate);
        }

        Document::with_fields(fields.build())
    }

    fn decode_all(documents: &[Document]) -> Vec<Reading> {
        documents.iter().filter_map(Self::decode_reading).collect()
    }
}

#[async_trait]
impl ReadingRepositoryTrait for FirestoreReadingRepository {
    async fn add_reading(&self, reading: &NewReading) -> Result<()> {
        let document = Self::encode_reading(reading, Utc::now());
        self.client
            .set_document(READINGS_COLLECTION, &reading.id, &document)
            .await?;
        Ok(())
    }

    async fn get_readings_since(
        &self,
        day_start: DateTime<Utc>,
        market_name: &str,
    ) -> Result<Vec<Reading>> {
        let query = StructuredQuery::collection(READINGS_COLLECTION)
            .filter_gte("timestamp", Value::TimestampValue(day_start))
            .filter_eq("market", Value::StringValue(market_name.to_string()));

        let documents = self.client.run_query(query).await?;
        Ok(Self::decode_all(&documents))
    }

    async fn get_recent_readings_for_product(
        &self,
        product_code: &str,
        limit: usize,
    ) -> Result<Vec<Reading>> {
        let query = StructuredQuery::collection(READINGS_COLLECTION)
            .filter_eq("code", Value::StringValue(product_code.to_string()))
            .order_by_desc("timestamp")
            .limit(limit as u32);

        let documents = self.client.run_query(query).await?;
        Ok(Self::decode_all(&documents))
    }

    async fn get_recent_readings_for_product_at_market(
        &self,
        product_code: &str,
        market_name: &str,
        limit: usize,
    ) -> Result<Vec<Reading>> {
        let query = StructuredQuery::collection(READINGS_COLLECTION)
            .filter_eq("code", Value::StringValue(product_code.to_string()))
            .filter_eq("market", Value::StringValue(market_name.to_string()))
            .order_by_desc("timestamp")
            .limit(limit as u32);

        let documents = self.client.run_query(query).await?;
        Ok(Self::decode_all(&documents))
    }
}
