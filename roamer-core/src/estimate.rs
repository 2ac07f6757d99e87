//! Great-circle distance and speed-based duration estimates.
//!
//! These are the fallback weights used whenever no external supplier
//! provides real travel data. All functions are pure.

use geo::Coord;

use crate::EstimateMode;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Round a distance to two decimal places.
///
/// # Examples
/// ```
/// use roamer_core::estimate::round_km;
///
/// assert_eq!(round_km(4.567), 4.57);
/// ```
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Round a duration to the nearest whole minute.
pub fn round_minutes(minutes: f64) -> f64 {
    minutes.round()
}

/// Haversine distance between two WGS84 coordinates, rounded to two decimals.
///
/// Coordinates use `x = longitude`, `y = latitude`, both in degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roamer_core::estimate::haversine_km;
///
/// let eiffel = Coord { x: 2.2945, y: 48.8584 };
/// let louvre = Coord { x: 2.3376, y: 48.8606 };
/// assert_eq!(haversine_km(eiffel, louvre), 3.16);
/// assert_eq!(haversine_km(eiffel, eiffel), 0.0);
/// ```
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    round_km(haversine_raw_km(a, b))
}

/// Unrounded haversine distance in kilometres.
///
/// Durations are estimated from this value, so only the reported distance
/// carries the two-decimal rounding.
pub fn haversine_raw_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let half_chord = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    // Clamp guards against rounding pushing the term just past 1.
    let angle = 2.0 * half_chord.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * angle
}

/// Minutes needed to cover `km` at the average speed of `mode`.
///
/// # Examples
/// ```
/// use roamer_core::{estimate::travel_minutes, EstimateMode};
///
/// assert_eq!(travel_minutes(10.0, EstimateMode::Driving), 10.0);
/// assert_eq!(travel_minutes(1.0, EstimateMode::Walking), 12.0);
/// assert_eq!(travel_minutes(2.6, EstimateMode::Cycling), 10.0);
/// ```
pub fn travel_minutes(km: f64, mode: EstimateMode) -> f64 {
    round_minutes(km / mode.speed_kmh() * 60.0)
}
