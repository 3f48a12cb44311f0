use crate::models::{GeoPoint, RouteEstimate, RouteSource};

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average urban emergency-vehicle speed (~40 km/h) used when the
/// routing provider is unavailable.
pub const FALLBACK_SPEED_KM_PER_MIN: f64 = 0.66;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Deterministic geometric route estimate between two points.
///
/// Great-circle distance with the travel time derived from the supplied
/// average speed in km per minute. Fully reproducible, no network involved.
pub fn geometric_estimate(origin: GeoPoint, dest: GeoPoint, speed_km_per_min: f64) -> RouteEstimate {
    let distance_km = haversine_distance(origin.lat, origin.lng, dest.lat, dest.lng);
    RouteEstimate {
        distance_km,
        duration_min: distance_km / speed_km_per_min,
        source: RouteSource::Fallback,
    }
}
