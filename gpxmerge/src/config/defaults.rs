//! Default values for configuration settings.

use std::path::PathBuf;

use crate::elevation::DEFAULT_ELEVATION_SERVICE;
use crate::merge::{DEFAULT_GRID_SIZE_DEGREES, DEFAULT_MINIMUM_DISTANCE_M};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "gpx-merger.yaml";

/// Sequential elevation lookups.
pub const DEFAULT_ELEVATION_WORKERS: usize = 1;

pub(super) fn minimum_distance() -> f64 {
    DEFAULT_MINIMUM_DISTANCE_M
}

pub(super) fn grid_size() -> f64 {
    DEFAULT_GRID_SIZE_DEGREES
}

pub(super) fn input_folder() -> PathBuf {
    PathBuf::from(".")
}

pub(super) fn elevation_service() -> String {
    DEFAULT_ELEVATION_SERVICE.to_string()
}

pub(super) fn elevation_workers() -> usize {
    DEFAULT_ELEVATION_WORKERS
}
