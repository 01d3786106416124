//! gpxmerge - merge GPX waypoint collections without near duplicates
//!
//! A master GPX file is combined with addon files from an input folder.
//! Waypoints closer than a minimum distance to an already kept waypoint are
//! dropped, using a coarse lat/lon grid so that only nearby points are
//! compared.
//!
//! # Pipeline
//!
//! 1. [`config`]: load and validate `gpx-merger.yaml`
//! 2. [`gpx`] and [`sources`]: read the master and discover addon files
//! 3. [`names`]: rewrite waypoint names with per-file patterns
//! 4. [`merge`]: grid merge-in per addon, then the closeness elimination pass
//! 5. [`elevation`]: optionally fill in missing elevations
//! 6. [`gpx`]: write the master document back with the merged waypoints
//!
//! ```
//! use std::sync::Arc;
//! use gpxmerge::log::NoOpLogger;
//! use gpxmerge::merge::{merge_sources, MergeConfig};
//! use gpxmerge::waypoint::Waypoint;
//!
//! let master = vec![Waypoint::new("Refuge", 45.0, 7.0)];
//! let addon = vec![Waypoint::new("Refuge (copy)", 45.0, 7.0001)];
//!
//! let outcome = merge_sources(
//!     master,
//!     vec![("addon.gpx", addon)],
//!     MergeConfig::default(),
//!     Arc::new(NoOpLogger),
//! );
//! assert_eq!(outcome.waypoints.len(), 1);
//! ```

pub mod config;
pub mod elevation;
pub mod gpx;
pub mod grid;
pub mod log;
pub mod logging;
pub mod merge;
pub mod names;
pub mod sources;
pub mod waypoint;

/// Version of the gpxmerge library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
