//! Cell-indexed waypoint store.

use std::collections::BTreeMap;

use super::key::{cell_key, CellKey};
use crate::waypoint::{distance, Waypoint};

/// Outcome of merging one batch of candidates into a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeInStats {
    /// Candidates inserted into their cell
    pub accepted: usize,
    /// Candidates dropped because a point in the same cell was too close
    pub discarded: usize,
}

/// Spatial grid mapping each cell to the waypoints accepted into it.
///
/// Cells keep insertion order and are iterated in key order, so flattening
/// is deterministic for a fixed input order.
#[derive(Debug, Clone)]
pub struct WaypointGrid {
    cell_size_degrees: f64,
    cells: BTreeMap<CellKey, Vec<Waypoint>>,
}

impl WaypointGrid {
    /// Create an empty grid with the given cell size.
    pub fn new(cell_size_degrees: f64) -> Self {
        Self {
            cell_size_degrees,
            cells: BTreeMap::new(),
        }
    }

    /// Build a grid holding every input point, unfiltered.
    pub fn build(points: impl IntoIterator<Item = Waypoint>, cell_size_degrees: f64) -> Self {
        let mut grid = Self::new(cell_size_degrees);
        for point in points {
            grid.insert(point);
        }
        grid
    }

    /// Cell size in degrees.
    pub fn cell_size_degrees(&self) -> f64 {
        self.cell_size_degrees
    }

    /// Insert a point into its cell without any distance check.
    pub fn insert(&mut self, point: Waypoint) {
        let key = cell_key(&point, self.cell_size_degrees);
        self.cells.entry(key).or_default().push(point);
    }

    /// Merge candidates into the grid, in input order.
    ///
    /// Each candidate is compared only with the points already in its own
    /// cell. If any of them is closer than `min_distance_m` the candidate is
    /// discarded, otherwise it is appended to the cell. A near-duplicate that
    /// sits just across a cell boundary is therefore accepted here and left
    /// for the elimination pass.
    pub fn merge_in(
        &mut self,
        candidates: impl IntoIterator<Item = Waypoint>,
        min_distance_m: f64,
    ) -> MergeInStats {
        let mut stats = MergeInStats::default();

        for candidate in candidates {
            let key = cell_key(&candidate, self.cell_size_degrees);
            let cell = self.cells.entry(key).or_default();

            let is_closeby = cell
                .iter()
                .any(|existing| distance(&candidate, existing) < min_distance_m);

            if is_closeby {
                stats.discarded += 1;
            } else {
                cell.push(candidate);
                stats.accepted += 1;
            }
        }

        stats
    }

    /// Points in a cell, empty if the cell has none.
    pub fn cell(&self, key: &CellKey) -> &[Waypoint] {
        self.cells.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over non-empty cells in key order.
    pub fn cells(&self) -> impl Iterator<Item = (&CellKey, &[Waypoint])> {
        self.cells.iter().map(|(key, points)| (key, points.as_slice()))
    }

    /// Number of non-empty cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Total number of points across all cells.
    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    /// Returns true if the grid holds no points.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Concatenate all cells into one list.
    ///
    /// Cells are visited in key order; points keep their insertion order
    /// within a cell.
    pub fn flatten(&self) -> Vec<Waypoint> {
        self.cells.values().flatten().cloned().collect()
    }
}
