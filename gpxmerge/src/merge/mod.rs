//! Waypoint merge engine.
//!
//! The merge runs in three phases:
//!
//! 1. The master waypoints are loaded into a [`WaypointGrid`](crate::grid::WaypointGrid)
//!    unfiltered.
//! 2. Each addon source is merged in, in order. A candidate is dropped when a
//!    point in its own cell is closer than the minimum distance.
//! 3. The grid is flattened and [`eliminate_closeby`] removes the near
//!    duplicates that straddle cell boundaries.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gpxmerge::log::NoOpLogger;
//! use gpxmerge::merge::{merge_sources, MergeConfig};
//! use gpxmerge::waypoint::Waypoint;
//!
//! let master = vec![Waypoint::new("Refuge", 45.0, 7.0)];
//! let addon = vec![Waypoint::new("Lac", 45.0, 7.01)];
//!
//! let outcome = merge_sources(
//!     master,
//!     vec![("addon.gpx", addon)],
//!     MergeConfig::new(50.0, 0.01),
//!     Arc::new(NoOpLogger),
//! );
//! assert_eq!(outcome.waypoints.len(), 2);
//! ```

mod config;
mod eliminate;
mod session;

pub use config::{
    ConfigWarning, EliminationPolicy, MergeConfig, MergeConfigError, DEFAULT_GRID_SIZE_DEGREES,
    DEFAULT_MINIMUM_DISTANCE_M,
};
pub use eliminate::{eliminate_closeby, EliminationResult, Removal};
pub use session::{merge_sources, MergeOutcome, MergeReport, MergeSession, SourceReport};
