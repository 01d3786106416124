//! Closeness elimination pass.
//!
//! Merge-in only compares a candidate with its own cell, so two points on
//! either side of a cell boundary can both be accepted. This pass walks the
//! flattened grid and checks each point against every point in the cells its
//! neighborhood touches.

use std::collections::HashMap;

use crate::grid::{neighbor_keys, CellKey, WaypointGrid};
use crate::log::Logger;
use crate::log_info;
use crate::waypoint::{distance, Waypoint};

use super::config::EliminationPolicy;

/// A point removed by the elimination pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    /// The removed point
    pub point: Waypoint,
    /// The first point found closer than the minimum distance
    pub conflict: Waypoint,
    /// Distance between the two, in meters
    pub distance_m: f64,
}

/// Result of the elimination pass.
#[derive(Debug, Clone, Default)]
pub struct EliminationResult {
    /// Retained points in flatten order
    pub retained: Vec<Waypoint>,
    /// Removed points in flatten order
    pub removals: Vec<Removal>,
    /// Smallest distance seen between a retained point and any distinct
    /// point it was compared with
    pub closest_retained_m: Option<f64>,
}

/// Remove points that are closer than `min_distance_m` to another distinct point.
///
/// The grid is flattened in key order and each point `p` is checked against
/// the points in [`neighbor_keys`] of `p`. The first distinct point closer
/// than the threshold marks `p` for removal and ends its scan. Value-identical
/// points (same name and coordinates) never conflict, which also keeps a
/// point from conflicting with itself.
///
/// With [`EliminationPolicy::Original`] conflicts are judged against the full
/// grid, so a removed point still removes later neighbors and a close pair
/// loses both members. In a chain of closely spaced points this removes more
/// than strictly needed. [`EliminationPolicy::Retained`] skips points that
/// were already removed.
pub fn eliminate_closeby(
    grid: &WaypointGrid,
    min_distance_m: f64,
    policy: EliminationPolicy,
    logger: &dyn Logger,
) -> EliminationResult {
    let cell_size = grid.cell_size_degrees();
    let points = grid.flatten();

    // Flatten index of the first point of every cell
    let mut cell_offsets: HashMap<CellKey, usize> = HashMap::with_capacity(grid.cell_count());
    let mut offset = 0;
    for (key, cell) in grid.cells() {
        cell_offsets.insert(*key, offset);
        offset += cell.len();
    }

    let mut removed = vec![false; points.len()];
    let mut removals = Vec::new();
    let mut closest_retained_m: Option<f64> = None;

    for (index, point) in points.iter().enumerate() {
        let mut conflict: Option<(&Waypoint, f64)> = None;
        let mut closest_here: Option<f64> = None;

        'scan: for key in neighbor_keys(point, cell_size, min_distance_m) {
            let Some(&cell_offset) = cell_offsets.get(&key) else {
                continue;
            };

            for (position, other) in grid.cell(&key).iter().enumerate() {
                if other.is_same_point(point) {
                    continue;
                }
                if policy == EliminationPolicy::Retained && removed[cell_offset + position] {
                    continue;
                }

                let d = distance(point, other);
                if d < min_distance_m {
                    conflict = Some((other, d));
                    break 'scan;
                }
                closest_here = Some(closest_here.map_or(d, |c| c.min(d)));
            }
        }

        match conflict {
            Some((other, d)) => {
                log_info!(
                    logger,
                    "Waypoint {} is marked for deletion, as it is too close to {} ({:.1} m)",
                    point.name,
                    other.name,
                    d
                );
                removed[index] = true;
                removals.push(Removal {
                    point: point.clone(),
                    conflict: other.clone(),
                    distance_m: d,
                });
            }
            None => {
                if let Some(d) = closest_here {
                    closest_retained_m = Some(closest_retained_m.map_or(d, |c| c.min(d)));
                }
            }
        }
    }

    let retained = points
        .into_iter()
        .zip(&removed)
        .filter(|(_, is_removed)| !**is_removed)
        .map(|(point, _)| point)
        .collect();

    EliminationResult {
        retained,
        removals,
        closest_retained_m,
    }
}
