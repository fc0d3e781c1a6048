use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// One barcode-scan event.
///
/// A physical scan can produce two records: an unconfirmed placeholder
/// written the moment the code is read, and a confirmed record written once
/// the user has entered the price. Both may coexist; aggregations that deal
/// in money filter on the presence of `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub id: String,
    pub product_code: String,
    pub price: Option<Decimal>,
    pub market_name: Option<String>,
    pub coordinate: Option<Coordinate>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub confirmed: bool,
}

/// Input model for a reading about to be persisted.
///
/// Carries no timestamp; the store stamps the document at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReading {
    pub id: String,
    pub product_code: String,
    pub price: Option<Decimal>,
    pub market_name: Option<String>,
    pub coordinate: Option<Coordinate>,
    pub confirmed: bool,
}

/// A reading at another market, annotated with the distance from the
/// market the user is currently at.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeReading {
    pub reading: Reading,
    pub distance_km: f64,
}

/// One point of a price timeline, shaped for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Day label in `DD/MM` form.
    pub label: String,
    pub price: f64,
}
