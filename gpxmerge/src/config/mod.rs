//! Run configuration.
//!
//! Settings are read from a YAML file (`gpx-merger.yaml` by default):
//!
//! ```
//! use std::path::Path;
//! use gpxmerge::config::ConfigFile;
//!
//! let yaml = "master: master.gpx\nminimumDistance: 30\n";
//! let config = ConfigFile::parse(yaml, Path::new("gpx-merger.yaml")).unwrap();
//!
//! assert_eq!(config.merge_config().minimum_distance_m, 30.0);
//! assert!(config.validate().unwrap().is_empty());
//! ```

mod defaults;
mod file;

pub use defaults::{DEFAULT_CONFIG_FILE, DEFAULT_ELEVATION_WORKERS};
pub use file::{ConfigFile, ConfigFileError};
