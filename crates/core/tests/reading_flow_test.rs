//! Service-level tests wiring the core services to in-memory
//! repositories, covering the scan -> confirm -> aggregate flow.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pricelens_core::feedback::{
    FeedbackRepositoryTrait, FeedbackService, FeedbackServiceTrait, NewSuggestion,
};
use pricelens_core::geo::Coordinate;
use pricelens_core::markets::{
    Market, MarketRepositoryTrait, MarketService, MarketServiceTrait,
};
use pricelens_core::products::{
    Product, ProductRepositoryTrait, ProductService, ProductServiceTrait, Unit,
};
use pricelens_core::readings::{
    NewReading, Reading, ReadingRepositoryTrait, ReadingService, ReadingServiceTrait,
};
use pricelens_core::Result;

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

// ---------------------------------------------------------------------------
// In-memory repositories
// ---------------------------------------------------------------------------

struct InMemoryMarketRepository {
    markets: Vec<Market>,
}

#[async_trait]
impl MarketRepositoryTrait for InMemoryMarketRepository {
    async fn get_markets(&self) -> Result<Vec<Market>> {
        Ok(self.markets.clone())
    }
}

#[derive(Default)]
struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepositoryTrait for InMemoryProductRepository {
    async fn get_product(&self, barcode: &str) -> Result<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.barcode == barcode)
            .cloned())
    }

    async fn save_product(&self, product: &Product) -> Result<()> {
        let mut products = self.products.lock().unwrap();
        products.retain(|p| p.barcode != product.barcode);
        products.push(product.clone());
        Ok(())
    }
}

/// Stamps writes with a test-controlled clock, mirroring the server
/// timestamp the real store assigns.
struct InMemoryReadingRepository {
    clock: Mutex<DateTime<Utc>>,
    readings: Mutex<Vec<Reading>>,
}

impl InMemoryReadingRepository {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            clock: Mutex::new(now),
            readings: Mutex::new(Vec::new()),
        }
    }

    fn set_now(&self, now: DateTime<Utc>) {
        *self.clock.lock().unwrap() = now;
    }

    fn seed(&self, reading: Reading) {
        self.readings.lock().unwrap().push(reading);
    }

    fn stored(&self) -> Vec<Reading> {
        self.readings.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReadingRepositoryTrait for InMemoryReadingRepository {
    async fn add_reading(&self, reading: &NewReading) -> Result<()> {
        let timestamp = *self.clock.lock().unwrap();
        self.readings.lock().unwrap().push(Reading {
            id: reading.id.clone(),
            product_code: reading.product_code.clone(),
            price: reading.price,
            market_name: reading.market_name.clone(),
            coordinate: reading.coordinate,
            timestamp: Some(timestamp),
            confirmed: reading.confirmed,
        });
        Ok(())
    }

    async fn get_readings_since(
        &self,
        day_start: DateTime<Utc>,
        market_name: &str,
    ) -> Result<Vec<Reading>> {
        Ok(self
            .stored()
            .into_iter()
            .filter(|r| matches!(r.timestamp, Some(ts) if ts >= day_start))
            .filter(|r| r.market_name.as_deref() == Some(market_name))
            .collect())
    }

    async fn get_recent_readings_for_product(
        &self,
        product_code: &str,
        limit: usize,
    ) -> Result<Vec<Reading>> {
        let mut readings: Vec<Reading> = self
            .stored()
            .into_iter()
            .filter(|r| r.product_code == product_code)
            .collect();
        readings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        readings.truncate(limit);
        Ok(readings)
    }

    async fn get_recent_readings_for_product_at_market(
        &self,
        product_code: &str,
        market_name: &str,
        limit: usize,
    ) -> Result<Vec<Reading>> {
        let mut readings: Vec<Reading> = self
            .stored()
            .into_iter()
            .filter(|r| r.product_code == product_code)
            .filter(|r| r.market_name.as_deref() == Some(market_name))
            .collect();
        readings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        readings.truncate(limit);
        Ok(readings)
    }
}

#[derive(Default)]
struct InMemoryFeedbackRepository {
    suggestions: Mutex<Vec<NewSuggestion>>,
}

#[async_trait]
impl FeedbackRepositoryTrait for InMemoryFeedbackRepository {
    async fn add_suggestion(&self, suggestion: &NewSuggestion) -> Result<()> {
        self.suggestions.lock().unwrap().push(suggestion.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const CODE: &str = "7891000100103";

fn market(id: &str, name: &str, coordinate: Option<Coordinate>) -> Market {
    Market {
        id: id.to_string(),
        name: name.to_string(),
        city: Some("Sao Paulo".to_string()),
        coordinate,
    }
}

fn confirmed(
    id: &str,
    price: Decimal,
    market: &str,
    coordinate: Option<Coordinate>,
    timestamp: DateTime<Utc>,
) -> Reading {
    Reading {
        id: id.to_string(),
        product_code: CODE.to_string(),
        price: Some(price),
        market_name: Some(market.to_string()),
        coordinate,
        timestamp: Some(timestamp),
        confirmed: true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scan_then_confirm_builds_the_cart() {
    let repository = Arc::new(InMemoryReadingRepository::new(dt(2024, 7, 10, 9, 0)));
    let service = ReadingService::new(repository.clone());
    let here = Coordinate::new(-23.55, -46.63);

    service
        .record_scan(CODE, Some(here), Some("Atacadao".to_string()))
        .await
        .unwrap();

    repository.set_now(dt(2024, 7, 10, 9, 1));
    service
        .confirm_reading(CODE, dec!(4.99), Some(here), Some("Atacadao".to_string()))
        .await
        .unwrap();

    // Two documents per physical scan: placeholder plus confirmed record.
    let stored = repository.stored();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().any(|r| r.price.is_none() && !r.confirmed));

    let cart = service.cart("Atacadao", dt(2024, 7, 10, 0, 0)).await.unwrap();
    assert_eq!(cart.summary.item_count, 1);
    assert_eq!(cart.summary.total, dec!(4.99));
    assert!(cart.readings.iter().all(|r| r.price.is_some()));
}

#[tokio::test]
async fn cart_is_scoped_to_the_current_day_and_market() {
    let repository = Arc::new(InMemoryReadingRepository::new(dt(2024, 7, 10, 12, 0)));
    repository.seed(confirmed("old", dec!(3.99), "Atacadao", None, dt(2024, 7, 9, 18, 0)));
    repository.seed(confirmed("elsewhere", dec!(4.49), "Extra", None, dt(2024, 7, 10, 10, 0)));
    repository.seed(confirmed("today", dec!(4.99), "Atacadao", None, dt(2024, 7, 10, 11, 0)));

    let service = ReadingService::new(repository);
    let cart = service.cart("Atacadao", dt(2024, 7, 10, 0, 0)).await.unwrap();

    assert_eq!(cart.summary.item_count, 1);
    assert_eq!(cart.readings[0].id, "today");
}

#[tokio::test]
async fn alternatives_come_back_sorted_and_without_the_current_market() {
    let repository = Arc::new(InMemoryReadingRepository::new(dt(2024, 7, 10, 12, 0)));
    repository.seed(confirmed("own", dec!(4.99), "Atacadao", Some(Coordinate::new(0.0, 0.0)), dt(2024, 7, 9, 10, 0)));
    repository.seed(confirmed("near", dec!(5.29), "Dia", Some(Coordinate::new(0.05, 0.0)), dt(2024, 7, 9, 11, 0)));
    repository.seed(confirmed("mid", dec!(4.59), "Extra", Some(Coordinate::new(0.1, 0.0)), dt(2024, 7, 9, 12, 0)));
    repository.seed(confirmed("far", dec!(3.99), "Assai", Some(Coordinate::new(1.0, 0.0)), dt(2024, 7, 9, 13, 0)));

    let service = ReadingService::new(repository);
    let current = market("m1", "Atacadao", Some(Coordinate::new(0.0, 0.0)));

    let alternatives = service.alternatives(CODE, &current).await.unwrap();
    let names: Vec<_> = alternatives
        .iter()
        .map(|a| a.reading.market_name.clone().unwrap())
        .collect();
    assert_eq!(names, vec!["Dia", "Extra"]);
    assert!(alternatives.iter().all(|a| a.distance_km <= 20.0));
}

#[tokio::test]
async fn alternatives_are_empty_when_the_current_market_has_no_coordinate() {
    let repository = Arc::new(InMemoryReadingRepository::new(dt(2024, 7, 10, 12, 0)));
    repository.seed(confirmed("near", dec!(5.29), "Dia", Some(Coordinate::new(0.05, 0.0)), dt(2024, 7, 9, 11, 0)));

    let service = ReadingService::new(repository);
    let current = market("m1", "Atacadao", None);

    assert!(service.alternatives(CODE, &current).await.unwrap().is_empty());
}

#[tokio::test]
async fn price_chart_runs_oldest_first() {
    let repository = Arc::new(InMemoryReadingRepository::new(dt(2024, 7, 10, 12, 0)));
    repository.seed(confirmed("d2", dec!(5.29), "Atacadao", None, dt(2024, 7, 8, 18, 0)));
    repository.seed(confirmed("d1", dec!(4.99), "Atacadao", None, dt(2024, 7, 6, 9, 0)));
    repository.seed(confirmed("d2-early", dec!(5.19), "Atacadao", None, dt(2024, 7, 8, 8, 0)));

    let service = ReadingService::new(repository);

    let days = service.price_timeline(CODE, "Atacadao").await.unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].id, "d2");

    let points = service.price_chart(CODE, "Atacadao").await.unwrap();
    let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["06/07", "08/07"]);
    assert_eq!(points[1].price, 5.29);
}

#[tokio::test]
async fn locate_returns_the_nearest_market_with_meter_distance() {
    let repository = Arc::new(InMemoryMarketRepository {
        markets: vec![
            market("m1", "Atacadao", Some(Coordinate::new(0.0, 0.001))),
            market("m2", "Extra", Some(Coordinate::new(0.1, 0.0))),
            market("m3", "Broken", None),
        ],
    });
    let service = MarketService::new(repository);

    let located = service
        .locate(&Coordinate::new(0.0, 0.0))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(located.market.name, "Atacadao");
    // ~111 m along the equator.
    assert!((located.distance_meters - 111).abs() <= 1);

    let nearby = service.nearby(&Coordinate::new(0.0, 0.0)).await.unwrap();
    assert_eq!(nearby.len(), 2);
    assert_eq!(nearby[0].market.name, "Atacadao");
}

#[tokio::test]
async fn unknown_product_lookup_is_none_and_registration_validates() {
    let repository = Arc::new(InMemoryProductRepository::default());
    let service = ProductService::new(repository);

    assert!(service.lookup(CODE).await.unwrap().is_none());

    let missing_barcode = Product {
        barcode: "  ".to_string(),
        name: "Arroz".to_string(),
        brand: String::new(),
        description: String::new(),
        quantity: dec!(5),
        unit: Unit::Kg,
    };
    assert!(service.register(missing_barcode).await.is_err());

    let product = Product {
        barcode: CODE.to_string(),
        name: "Arroz".to_string(),
        brand: "Tio Joao".to_string(),
        description: "Arroz branco tipo 1".to_string(),
        quantity: dec!(5),
        unit: Unit::Kg,
    };
    service.register(product.clone()).await.unwrap();
    assert_eq!(service.lookup(CODE).await.unwrap(), Some(product));
}

#[tokio::test]
async fn feedback_requires_a_message() {
    let repository = Arc::new(InMemoryFeedbackRepository::default());
    let service = FeedbackService::new(repository.clone());

    assert!(service.submit("a@b.com", "   ").await.is_err());

    service.submit("a@b.com", "More markets, please").await.unwrap();
    let suggestions = repository.suggestions.lock().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].message, "More markets, please");
}
