use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// A physical store location users record prices at.
///
/// Markets are fetched fresh from the store on each use; nothing is cached
/// across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    /// Missing or malformed coordinates are preserved as `None`; the
    /// resolver and listings skip such markets.
    pub coordinate: Option<Coordinate>,
}

/// A market paired with its distance from a reference position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDistance {
    pub market: Market,
    pub distance_km: f64,
}

/// The market the user is taken to be at: the nearest one, with the
/// distance in whole meters for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedMarket {
    pub market: Market,
    pub distance_meters: i64,
}
