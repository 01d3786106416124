//! Cell keys and neighbor resolution.

use std::fmt;

use crate::waypoint::{meters_to_degrees, Waypoint};

/// Identifier of a grid cell.
///
/// Holds the floored cell indices `floor(lat / size)` and `floor(lon / size)`.
/// Keeping the indices as integers makes the key a pure function of its
/// inputs with no float formatting involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Latitude index (south to north)
    pub lat_index: i64,
    /// Longitude index (west to east)
    pub lon_index: i64,
}

impl CellKey {
    /// Create a key from raw indices.
    pub const fn new(lat_index: i64, lon_index: i64) -> Self {
        Self {
            lat_index,
            lon_index,
        }
    }

    /// Key of the cell containing the given coordinates.
    ///
    /// `cell_size_degrees` must be positive; this is enforced when the
    /// configuration is validated, not here.
    #[inline]
    pub fn from_coords(latitude: f64, longitude: f64, cell_size_degrees: f64) -> Self {
        Self {
            lat_index: (latitude / cell_size_degrees).floor() as i64,
            lon_index: (longitude / cell_size_degrees).floor() as i64,
        }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2},{:.2}",
            self.lat_index as f64, self.lon_index as f64
        )
    }
}

/// Key of the cell a waypoint falls into.
#[inline]
pub fn cell_key(point: &Waypoint, cell_size_degrees: f64) -> CellKey {
    CellKey::from_coords(point.latitude, point.longitude, cell_size_degrees)
}

/// Lower bound for the longitude scale factor so offsets stay finite at the poles.
const MIN_LON_SCALE: f64 = 0.01;

/// Cells that may hold a point within `search_distance_m` of `point`.
///
/// The search distance is converted to a degree offset and every cell index
/// between `floor((x - offset) / size)` and `floor((x + offset) / size)` is
/// returned, on both axes. The longitude offset is widened by
/// `1 / cos(latitude)` because a degree of longitude shrinks away from the
/// equator; near the poles it can exceed one cell, in which case the whole
/// span is enumerated rather than skipping the cells in between.
///
/// Keys come latitude-major in ascending order. While both offsets fit in one
/// cell this is the 3×3 neighborhood around the point, deduplicated (between
/// one and nine keys).
pub fn neighbor_keys(
    point: &Waypoint,
    cell_size_degrees: f64,
    search_distance_m: f64,
) -> Vec<CellKey> {
    let lat_offset = meters_to_degrees(search_distance_m);
    let lon_scale = point.latitude.to_radians().cos().max(MIN_LON_SCALE);
    let lon_offset = lat_offset / lon_scale;

    let lat_span = index_span(point.latitude, lat_offset, cell_size_degrees);
    let lon_span = index_span(point.longitude, lon_offset, cell_size_degrees);

    let mut keys = Vec::with_capacity(9);
    for lat_index in lat_span {
        for lon_index in lon_span.clone() {
            keys.push(CellKey::new(lat_index, lon_index));
        }
    }
    keys
}

/// Cell indices touched by `[value - offset, value + offset]`.
fn index_span(value: f64, offset: f64, cell_size_degrees: f64) -> std::ops::RangeInclusive<i64> {
    let low = ((value - offset) / cell_size_degrees).floor() as i64;
    let high = ((value + offset) / cell_size_degrees).floor() as i64;
    low..=high
}
