use rust_decimal::Decimal;
use serde::Serialize;

use crate::readings::Reading;

/// Totals for the current day's readings at a market.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub total: Decimal,
    pub item_count: usize,
}

/// Today's confirmed readings at the current market together with their
/// summary. Derived and ephemeral; recomputed whenever the reading set
/// changes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub readings: Vec<Reading>,
    pub summary: CartSummary,
}

/// Reduces a set of readings to an item count and a price total.
///
/// Callers are expected to pass confirmed readings only, but a reading
/// without a price is tolerated: it still counts as an item and
/// contributes zero to the total. Repeated scans of the same product count
/// separately.
pub fn summarize_cart(readings: &[Reading]) -> CartSummary {
    let total = readings
        .iter()
        .filter_map(|r| r.price)
        .fold(Decimal::ZERO, |sum, price| sum + price);

    CartSummary {
        total,
        item_count: readings.len(),
    }
}
