use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::readings_aggregator::{chart_points, nearby_alternatives, readings_today, timeline};
use super::readings_model::{AlternativeReading, ChartPoint, NewReading, Reading};
use super::readings_traits::{ReadingRepositoryTrait, ReadingServiceTrait};
use crate::cart::{summarize_cart, Cart};
use crate::constants::{ALTERNATIVE_RADIUS_KM, RECENT_READINGS_LIMIT};
use crate::geo::Coordinate;
use crate::markets::Market;
use crate::Result;

/// Service for recording scans and aggregating price readings.
pub struct ReadingService {
    reading_repository: Arc<dyn ReadingRepositoryTrait>,
}

impl ReadingService {
    /// Creates a new ReadingService instance with an injected repository.
    pub fn new(reading_repository: Arc<dyn ReadingRepositoryTrait>) -> Self {
        Self { reading_repository }
    }
}

#[async_trait::async_trait]
impl ReadingServiceTrait for ReadingService {
    /// Writes the unconfirmed placeholder the moment a barcode is read.
    /// The confirmed record follows as a separate write once the user has
    /// entered the price.
    async fn record_scan(
        &self,
        product_code: &str,
        position: Option<Coordinate>,
        market_name: Option<String>,
    ) -> Result<NewReading> {
        let reading = NewReading {
            id: Uuid::new_v4().to_string(),
            product_code: product_code.to_string(),
            price: None,
            market_name,
            coordinate: position,
            confirmed: false,
        };

        self.reading_repository.add_reading(&reading).await?;
        debug!("Recorded scan {} for product {}", reading.id, product_code);
        Ok(reading)
    }

    /// Writes the confirmed record carrying the user-entered price.
    async fn confirm_reading(
        &self,
        product_code: &str,
        price: Decimal,
        position: Option<Coordinate>,
        market_name: Option<String>,
    ) -> Result<NewReading> {
        let reading = NewReading {
            id: Uuid::new_v4().to_string(),
            product_code: product_code.to_string(),
            price: Some(price),
            market_name,
            coordinate: position,
            confirmed: true,
        };

        self.reading_repository.add_reading(&reading).await?;
        debug!(
            "Confirmed reading {} for product {} at {}",
            reading.id, product_code, price
        );
        Ok(reading)
    }

    /// Today's confirmed readings at `market_name` with their summary.
    async fn cart(&self, market_name: &str, day_start: DateTime<Utc>) -> Result<Cart> {
        let fetched = self
            .reading_repository
            .get_readings_since(day_start, market_name)
            .await?;
        // The store already narrows by window and market; the aggregation
        // re-applies the contract and drops placeholders.
        let readings = readings_today(&fetched, market_name, day_start);
        let summary = summarize_cart(&readings);
        Ok(Cart { readings, summary })
    }

    /// Comparable recent prices for `product_code` at markets near
    /// `current_market`. Empty when the current market has no usable
    /// coordinate to measure from.
    async fn alternatives(
        &self,
        product_code: &str,
        current_market: &Market,
    ) -> Result<Vec<AlternativeReading>> {
        let coordinate = match current_market.coordinate.filter(|c| c.is_valid()) {
            Some(c) => c,
            None => {
                warn!(
                    "Market '{}' has no usable coordinate; skipping price comparison",
                    current_market.name
                );
                return Ok(Vec::new());
            }
        };

        let readings = self
            .reading_repository
            .get_recent_readings_for_product(product_code, RECENT_READINGS_LIMIT)
            .await?;

        Ok(nearby_alternatives(
            &readings,
            product_code,
            &current_market.name,
            &coordinate,
            ALTERNATIVE_RADIUS_KM,
        ))
    }

    /// One reading per calendar day for the product at the market, most
    /// recent day first.
    async fn price_timeline(
        &self,
        product_code: &str,
        market_name: &str,
    ) -> Result<Vec<Reading>> {
        let readings = self
            .reading_repository
            .get_recent_readings_for_product_at_market(
                product_code,
                market_name,
                RECENT_READINGS_LIMIT,
            )
            .await?;
        Ok(timeline(&readings, product_code, market_name))
    }

    /// The timeline reshaped for the line chart: oldest first, `DD/MM`
    /// labels, primitive prices.
    async fn price_chart(
        &self,
        product_code: &str,
        market_name: &str,
    ) -> Result<Vec<ChartPoint>> {
        let days = self.price_timeline(product_code, market_name).await?;
        Ok(chart_points(&days))
    }
}
