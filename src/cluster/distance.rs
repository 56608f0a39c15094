use std::f64::consts::PI;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Earth mean radius in kilometers
pub const EARTH_R: f64 = 6371.0088;

use super::coordinate::Coordinate;

/// Calculates great-circle distance between two coordinates with the haversine formula
///
/// Differences are taken in radians so that huge out-of-range degrees cannot
/// overflow to infinity. The haversine term is clamped to `[0, 1]` before
/// `asin`, so rounding overshoot on antipodal or coincident points never
/// leaves the domain.
///
/// # Returns
///
/// Distance in kilometers
pub fn distance_haversine(p1: &Coordinate, p2: &Coordinate) -> f64 {
    let lat1 = p1.lat * DEGREE_RAD;
    let lat2 = p2.lat * DEGREE_RAD;
    let d_lat = lat2 - lat1;
    let d_lon = p2.lon * DEGREE_RAD - p1.lon * DEGREE_RAD;

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_R * h.sqrt().asin()
}
