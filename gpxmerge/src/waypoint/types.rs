//! Waypoint type definitions

use std::fmt;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A named geographic location.
///
/// Only `latitude`, `longitude`, `elevation` and `name` take part in merging.
/// The remaining fields are carried through from the source file untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Waypoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Elevation in meters, `None` when the source has no value
    pub elevation: Option<f64>,
    /// Display name (empty when the source has none)
    pub name: String,
    /// GPX `<cmt>`
    pub comment: Option<String>,
    /// GPX `<desc>`
    pub description: Option<String>,
    /// GPX `<sym>`
    pub symbol: Option<String>,
    /// GPX `<type>`
    pub kind: Option<String>,
}

impl Waypoint {
    /// Create a waypoint with a name and position and no elevation.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style elevation setter.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Value identity used by deduplication.
    ///
    /// Two waypoints are the same point when name, latitude and longitude all
    /// match exactly. Elevation and the pass-through fields are ignored.
    #[inline]
    pub fn is_same_point(&self, other: &Waypoint) -> bool {
        self.name == other.name
            && self.latitude == other.latitude
            && self.longitude == other.longitude
    }

    /// Checks that the coordinates are finite and inside the valid ranges.
    pub fn validate(&self) -> Result<(), WaypointError> {
        if !self.latitude.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&self.latitude) {
            return Err(WaypointError::InvalidLatitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(MIN_LON..=MAX_LON).contains(&self.longitude) {
            return Err(WaypointError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.6}, {:.6})",
            self.name, self.latitude, self.longitude
        )
    }
}

/// Errors raised for waypoints with unusable coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaypointError {
    /// Latitude is not finite or outside -90..=90
    #[error("Invalid latitude: {0} (must be between {MIN_LAT} and {MAX_LAT})")]
    InvalidLatitude(f64),
    /// Longitude is not finite or outside -180..=180
    #[error("Invalid longitude: {0} (must be between {MIN_LON} and {MAX_LON})")]
    InvalidLongitude(f64),
}
