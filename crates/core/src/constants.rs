/// Mean Earth radius in kilometers, used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Maximum distance, in kilometers, at which a reading from another market
/// is still offered as a price alternative.
pub const ALTERNATIVE_RADIUS_KM: f64 = 20.0;

/// How many recent readings to request when picking per-market or per-day
/// representatives.
pub const RECENT_READINGS_LIMIT: usize = 50;

/// Maximum number of entries in the nearby-markets listing.
pub const NEARBY_MARKETS_LIMIT: usize = 20;

/// Collection holding market records.
pub const MARKETS_COLLECTION: &str = "markets";

/// Collection holding scan readings.
pub const READINGS_COLLECTION: &str = "readings";

/// Collection holding the product catalog, keyed by barcode.
pub const PRODUCTS_COLLECTION: &str = "products";

/// Collection holding user suggestions.
pub const SUGGESTIONS_COLLECTION: &str = "suggestions";
