//! Pure reductions over already-fetched reading snapshots.
//!
//! Every function here is synchronous and referentially transparent: day
//! boundaries are passed in, never read from the clock, and caller-supplied
//! ordering is not trusted where "most recent wins" matters.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use num_traits::ToPrimitive;

use super::readings_model::{AlternativeReading, ChartPoint, Reading};
use crate::geo::{distance_km, Coordinate};

/// Readings recorded at `market_name` since `day_start`, placeholder
/// records excluded.
///
/// No dedup happens here: a product scanned twice appears twice, and the
/// cart counts every scan.
pub fn readings_today(
    readings: &[Reading],
    market_name: &str,
    day_start: DateTime<Utc>,
) -> Vec<Reading> {
    readings
        .iter()
        .filter(|r| r.price.is_some())
        .filter(|r| r.market_name.as_deref() == Some(market_name))
        .filter(|r| matches!(r.timestamp, Some(ts) if ts >= day_start))
        .cloned()
        .collect()
}

/// The most recent confirmed reading of `product_code` at each market other
/// than `current_market_name`, kept when within `max_distance_km` of
/// `current_market_coordinate`, ascending by distance.
///
/// Input order is not trusted: candidates are re-sorted newest-first before
/// the per-market grouping, so "most recent per market" holds for any
/// caller ordering. Readings without a price, market name, or usable
/// coordinate are skipped, never fatal.
pub fn nearby_alternatives(
    readings: &[Reading],
    product_code: &str,
    current_market_name: &str,
    current_market_coordinate: &Coordinate,
    max_distance_km: f64,
) -> Vec<AlternativeReading> {
    let mut candidates: Vec<&Reading> = readings
        .iter()
        .filter(|r| r.product_code == product_code)
        .filter(|r| r.price.is_some())
        .filter(|r| r.market_name.is_some())
        .collect();

    // Newest first; readings without a timestamp sort last.
    candidates.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut latest_per_market: HashMap<&str, &Reading> = HashMap::new();
    for reading in candidates {
        if let Some(market) = reading.market_name.as_deref() {
            latest_per_market.entry(market).or_insert(reading);
        }
    }

    let mut alternatives: Vec<AlternativeReading> = latest_per_market
        .into_values()
        .filter(|r| r.market_name.as_deref() != Some(current_market_name))
        .filter_map(|r| {
            let coordinate = r.coordinate.as_ref().filter(|c| c.is_valid())?;
            let distance = distance_km(current_market_coordinate, coordinate);
            if distance <= max_distance_km {
                Some(AlternativeReading {
                    reading: r.clone(),
                    distance_km: distance,
                })
            } else {
                None
            }
        })
        .collect();

    alternatives.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    alternatives
}

/// One confirmed reading per calendar day for `product_code` at
/// `market_name`, most recent day first.
///
/// Within a day the most recent reading represents it. Day granularity
/// ignores time of day entirely. Callers decide what to do with short
/// results (the app charts only from two distinct days up).
pub fn timeline(readings: &[Reading], product_code: &str, market_name: &str) -> Vec<Reading> {
    let mut candidates: Vec<&Reading> = readings
        .iter()
        .filter(|r| r.product_code == product_code)
        .filter(|r| r.market_name.as_deref() == Some(market_name))
        .filter(|r| r.price.is_some())
        .filter(|r| r.timestamp.is_some())
        .collect();

    candidates.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut seen_days: HashSet<NaiveDate> = HashSet::new();
    let mut representatives = Vec::new();
    for reading in candidates {
        if let Some(ts) = reading.timestamp {
            // First hit per day wins; with the descending sort that is the
            // day's most recent reading, and output stays day-descending.
            if seen_days.insert(ts.date_naive()) {
                representatives.push(reading.clone());
            }
        }
    }

    representatives
}

/// Maps a timeline (most recent day first) into chart points ordered oldest
/// first, labeled `DD/MM`.
pub fn chart_points(timeline: &[Reading]) -> Vec<ChartPoint> {
    timeline
        .iter()
        .rev()
        .filter_map(|r| {
            let ts = r.timestamp?;
            let price = r.price?.to_f64()?;
            Some(ChartPoint {
                label: ts.format("%d/%m").to_string(),
                price,
            })
        })
        .collect()
}
