//! YAML configuration file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::merge::{ConfigWarning, EliminationPolicy, MergeConfig, MergeConfigError};
use crate::names::{NamePatterns, PatternError};

use super::defaults;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Config file does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to read config file
    #[error("Failed to read config file {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML or missing required key
    #[error("Failed to parse config file {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Merge parameters out of range
    #[error("Invalid configuration: {0}")]
    Merge(#[from] MergeConfigError),

    /// Name pattern does not compile
    #[error("Invalid configuration: {0}")]
    Pattern(#[from] PatternError),

    /// Invalid configuration value
    #[error("Invalid configuration: {key} = '{value}' - {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Contents of `gpx-merger.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Minimum distance between kept waypoints, in meters
    #[serde(default = "defaults::minimum_distance")]
    pub minimum_distance: f64,

    /// Grid cell size in degrees
    #[serde(default = "defaults::grid_size")]
    pub grid_size_in_degree: f64,

    /// Master GPX file
    pub master: PathBuf,

    /// Folder scanned for addon GPX files
    #[serde(default = "defaults::input_folder")]
    pub input_folder: PathBuf,

    /// Folder a bare output file name is placed in
    #[serde(default)]
    pub output_folder: Option<PathBuf>,

    /// Name patterns per source file name, `default` as fallback
    #[serde(default)]
    pub files: BTreeMap<String, String>,

    #[serde(default)]
    pub elevation_lookup: bool,

    #[serde(default)]
    pub render_elevation: bool,

    #[serde(default = "defaults::elevation_service")]
    pub elevation_service: String,

    #[serde(default = "defaults::elevation_workers")]
    pub elevation_workers: usize,

    #[serde(default)]
    pub elimination_policy: EliminationPolicy,

    /// Log and skip unreadable addon files instead of aborting
    #[serde(default)]
    pub skip_invalid_sources: bool,
}

impl ConfigFile {
    /// Load configuration from the default file in the working directory.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(Path::new(defaults::DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Err(ConfigFileError::NotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigFileError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse YAML text. `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigFileError> {
        serde_yaml::from_str(text).map_err(|source| ConfigFileError::ParseError {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Merge parameters from this file.
    pub fn merge_config(&self) -> MergeConfig {
        MergeConfig::new(self.minimum_distance, self.grid_size_in_degree)
            .with_policy(self.elimination_policy)
    }

    /// Compile the `files` patterns.
    pub fn name_patterns(&self) -> Result<NamePatterns, PatternError> {
        NamePatterns::compile(&self.files)
    }

    /// Check every value that would make the run fail later.
    ///
    /// Returns the non-fatal findings.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, ConfigFileError> {
        let warnings = self.merge_config().validate()?;

        if self.elevation_workers == 0 {
            return Err(ConfigFileError::InvalidValue {
                key: "elevationWorkers".to_string(),
                value: self.elevation_workers.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.elevation_lookup && self.elevation_service.trim().is_empty() {
            return Err(ConfigFileError::InvalidValue {
                key: "elevationService".to_string(),
                value: self.elevation_service.clone(),
                reason: "required when elevationLookup is enabled".to_string(),
            });
        }

        self.name_patterns()?;
        Ok(warnings)
    }

    /// Where the merged file is written.
    ///
    /// A bare file name is placed in `outputFolder` when one is configured;
    /// any other path is used as given.
    pub fn output_path(&self, output: &Path) -> PathBuf {
        match &self.output_folder {
            Some(folder) if is_bare_file_name(output) => folder.join(output),
            _ => output.to_path_buf(),
        }
    }
}

fn is_bare_file_name(path: &Path) -> bool {
    path.parent().is_some_and(|p| p.as_os_str().is_empty())
}
