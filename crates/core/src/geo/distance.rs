use crate::constants::EARTH_RADIUS_KM;

use super::Coordinate;

/// Great-circle distance between two coordinates in kilometers, using the
/// haversine formula on a spherical Earth.
///
/// Inputs are degrees and are converted to radians internally. Out-of-range
/// values are not rejected; a NaN component yields a NaN distance rather
/// than an error.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    // Clamped so rounding near antipodal points cannot push `1 - h`
    // negative.
    let h = ((d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Same distance in meters, for display formatting.
pub fn distance_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    distance_km(a, b) * 1000.0
}
