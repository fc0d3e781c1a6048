pub(crate) mod distance;
pub(crate) mod format;

// Re-export the public interface
pub use distance::{distance_km, distance_meters};
pub use format::format_distance;

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite numbers.
    ///
    /// Upstream data can carry records whose coordinates are missing or
    /// malformed; every consumer goes through this one predicate instead of
    /// checking fields at each call site. Range validation is out of scope
    /// here, callers own the meaning of out-of-range degrees.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}
