//! Spatial grid for waypoint deduplication.
//!
//! Waypoints are bucketed into square cells of a configurable size in degrees.
//! Cells bound the number of distance checks: a merge-in candidate is only
//! compared with its own cell, while the elimination pass looks at the 3×3
//! block returned by [`neighbor_keys`].
//!
//! # Example
//!
//! ```
//! use gpxmerge::grid::{WaypointGrid, cell_key};
//! use gpxmerge::waypoint::Waypoint;
//!
//! let master = vec![Waypoint::new("Refuge", 45.0, 7.0)];
//! let mut grid = WaypointGrid::build(master, 0.01);
//!
//! let stats = grid.merge_in(vec![Waypoint::new("Refuge bis", 45.0, 7.0001)], 50.0);
//! assert_eq!(stats.discarded, 1);
//! assert_eq!(grid.len(), 1);
//! ```

mod index;
mod key;

pub use index::{MergeInStats, WaypointGrid};
pub use key::{cell_key, neighbor_keys, CellKey};
