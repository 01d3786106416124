//! Merge parameters and their validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::waypoint::degrees_to_meters;

/// Default minimum distance between kept waypoints, in meters.
pub const DEFAULT_MINIMUM_DISTANCE_M: f64 = 50.0;

/// Default grid cell size in degrees (~1.1 km).
pub const DEFAULT_GRID_SIZE_DEGREES: f64 = 0.01;

/// How the elimination pass treats points it has already removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EliminationPolicy {
    /// Conflicts are evaluated against the full accepted set.
    ///
    /// Removing a point does not stop it from conflicting with later points,
    /// so both members of a close pair are removed.
    #[default]
    Original,
    /// A point that was already removed no longer counts as a conflict.
    ///
    /// Exactly one member of a close pair survives.
    Retained,
}

impl fmt::Display for EliminationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EliminationPolicy::Original => write!(f, "original"),
            EliminationPolicy::Retained => write!(f, "retained"),
        }
    }
}

impl FromStr for EliminationPolicy {
    type Err = MergeConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "original" => Ok(EliminationPolicy::Original),
            "retained" => Ok(EliminationPolicy::Retained),
            _ => Err(MergeConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Errors for merge parameters that make the merge meaningless.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MergeConfigError {
    #[error("minimumDistance must be a positive number of meters, got {0}")]
    InvalidMinimumDistance(f64),
    #[error("gridSizeInDegree must be a positive number of degrees, got {0}")]
    InvalidGridSize(f64),
    #[error("Unknown elimination policy '{0}' (expected 'original' or 'retained')")]
    UnknownPolicy(String),
}

/// Non-fatal configuration findings reported at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// The minimum distance spans more than one grid cell. Merge-in only
    /// compares within a cell, so most duplicates are left to the
    /// elimination pass, which then scans beyond the 3×3 neighborhood.
    SearchExceedsCell {
        minimum_distance_m: f64,
        cell_size_m: f64,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::SearchExceedsCell {
                minimum_distance_m,
                cell_size_m,
            } => write!(
                f,
                "minimumDistance ({:.1} m) exceeds the grid cell size ({:.1} m); \
                 merge-in will keep most duplicates and elimination scans beyond adjacent cells",
                minimum_distance_m, cell_size_m
            ),
        }
    }
}

/// Parameters of the spatial merge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeConfig {
    /// Points closer than this many meters are duplicates
    pub minimum_distance_m: f64,
    /// Grid cell size in degrees
    pub grid_size_degrees: f64,
    /// Elimination pass behaviour
    pub policy: EliminationPolicy,
}

impl MergeConfig {
    /// Create a configuration with the default elimination policy.
    pub fn new(minimum_distance_m: f64, grid_size_degrees: f64) -> Self {
        Self {
            minimum_distance_m,
            grid_size_degrees,
            policy: EliminationPolicy::default(),
        }
    }

    /// Set the elimination policy.
    pub fn with_policy(mut self, policy: EliminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Grid cell size expressed in meters.
    pub fn cell_size_m(&self) -> f64 {
        degrees_to_meters(self.grid_size_degrees)
    }

    /// Check the parameters.
    ///
    /// Non-positive or non-finite values are errors. A minimum distance wider
    /// than one cell is accepted but reported as a warning.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, MergeConfigError> {
        if !self.minimum_distance_m.is_finite() || self.minimum_distance_m <= 0.0 {
            return Err(MergeConfigError::InvalidMinimumDistance(
                self.minimum_distance_m,
            ));
        }
        if !self.grid_size_degrees.is_finite() || self.grid_size_degrees <= 0.0 {
            return Err(MergeConfigError::InvalidGridSize(self.grid_size_degrees));
        }

        let mut warnings = Vec::new();
        if self.minimum_distance_m > self.cell_size_m() {
            warnings.push(ConfigWarning::SearchExceedsCell {
                minimum_distance_m: self.minimum_distance_m,
                cell_size_m: self.cell_size_m(),
            });
        }
        Ok(warnings)
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_DISTANCE_M, DEFAULT_GRID_SIZE_DEGREES)
    }
}
