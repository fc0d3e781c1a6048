use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::readings_model::{AlternativeReading, ChartPoint, NewReading, Reading};
use crate::cart::Cart;
use crate::geo::Coordinate;
use crate::markets::Market;
use crate::Result;

/// Trait defining the contract for reading repository operations.
///
/// The query methods mirror what the aggregations need from the store:
/// filtered by product code, market name, or time window, newest first,
/// with a result cap.
#[async_trait]
pub trait ReadingRepositoryTrait: Send + Sync {
    async fn add_reading(&self, reading: &NewReading) -> Result<()>;
    async fn get_readings_since(
        &self,
        day_start: DateTime<Utc>,
        market_name: &str,
    ) -> Result<Vec<Reading>>;
    async fn get_recent_readings_for_product(
        &self,
        product_code: &str,
        limit: usize,
    ) -> Result<Vec<Reading>>;
    async fn get_recent_readings_for_product_at_market(
        &self,
        product_code: &str,
        market_name: &str,
        limit: usize,
    ) -> Result<Vec<Reading>>;
}

/// Trait defining the contract for reading service operations.
#[async_trait]
pub trait ReadingServiceTrait: Send + Sync {
    async fn record_scan(
        &self,
        product_code: &str,
        position: Option<Coordinate>,
        market_name: Option<String>,
    ) -> Result<NewReading>;
    async fn confirm_reading(
        &self,
        product_code: &str,
        price: Decimal,
        position: Option<Coordinate>,
        market_name: Option<String>,
    ) -> Result<NewReading>;
    async fn cart(&self, market_name: &str, day_start: DateTime<Utc>) -> Result<Cart>;
    async fn alternatives(
        &self,
        product_code: &str,
        current_market: &Market,
    ) -> Result<Vec<AlternativeReading>>;
    async fn price_timeline(&self, product_code: &str, market_name: &str)
        -> Result<Vec<Reading>>;
    async fn price_chart(&self, product_code: &str, market_name: &str) -> Result<Vec<ChartPoint>>;
}
