//! Waypoint model and distance math
//!
//! Distances are planar: the latitude/longitude deltas are scaled into meters
//! with a fixed meridian length and a cosine correction for longitude. This is
//! accurate to well under a percent for the short separations the merge cares
//! about, and it is what grid sizing assumes.

mod types;

pub use types::{Waypoint, WaypointError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Meters per degree of latitude used by the distance function.
///
/// Quarter meridian of 10 000.8 km divided by 90 degrees.
pub const METERS_PER_DEGREE_LAT: f64 = 1000.0 * 10_000.8 / 90.0;

/// Meters per degree used to size grid cells and neighbor search offsets.
pub const GRID_METERS_PER_DEGREE: f64 = 111_000.0;

/// Planar distance in meters between two coordinates.
///
/// The longitude delta is scaled by the cosine of the mean latitude, which
/// keeps the function symmetric in its arguments.
#[inline]
pub fn planar_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let coef = ((lat1 + lat2) / 2.0).to_radians().cos();
    let dy = lat1 - lat2;
    let dx = (lon1 - lon2) * coef;
    (dx * dx + dy * dy).sqrt() * METERS_PER_DEGREE_LAT
}

/// Planar distance in meters between two waypoints.
#[inline]
pub fn distance(a: &Waypoint, b: &Waypoint) -> f64 {
    planar_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Converts a distance in meters into degrees at grid scale.
#[inline]
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / GRID_METERS_PER_DEGREE
}

/// Converts a size in degrees into meters at grid scale.
#[inline]
pub fn degrees_to_meters(degrees: f64) -> f64 {
    degrees * GRID_METERS_PER_DEGREE
}

#[cfg(test)]
mod tests;
