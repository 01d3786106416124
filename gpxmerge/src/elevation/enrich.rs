//! Elevation enrichment and rendering.

use rayon::prelude::*;

use crate::log::Logger;
use crate::waypoint::Waypoint;
use crate::{log_debug, log_warn};

use super::types::ElevationLookup;

/// Counters from one enrichment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    /// Waypoints that already had an elevation and were not looked up
    pub already_present: usize,
    /// Lookups that returned an elevation
    pub filled: usize,
    /// Lookups that succeeded without a value
    pub unavailable: usize,
    /// Lookups that failed
    pub failed: usize,
}

impl EnrichmentSummary {
    /// Number of lookups performed.
    pub fn requested(&self) -> usize {
        self.filled + self.unavailable + self.failed
    }
}

enum Outcome {
    Filled,
    Unavailable,
    Failed,
}

fn enrich_one(point: &mut Waypoint, lookup: &dyn ElevationLookup, logger: &dyn Logger) -> Outcome {
    match lookup.lookup(point.latitude, point.longitude) {
        Ok(Some(elevation)) => {
            log_debug!(logger, "Elevation of {}: {:.1} m", point.name, elevation);
            point.elevation = Some(elevation);
            Outcome::Filled
        }
        Ok(None) => Outcome::Unavailable,
        Err(e) => {
            log_warn!(logger, "Elevation lookup failed for {}: {}", point, e);
            Outcome::Failed
        }
    }
}

/// Look up elevations for the waypoints that have none.
///
/// Waypoints with an elevation are never touched. A failed lookup leaves the
/// waypoint without an elevation. With `workers > 1` the lookups run on a
/// dedicated thread pool of that size; otherwise they run sequentially in
/// order.
pub fn enrich_elevations(
    points: &mut [Waypoint],
    lookup: &dyn ElevationLookup,
    workers: usize,
    logger: &dyn Logger,
) -> EnrichmentSummary {
    let mut summary = EnrichmentSummary {
        already_present: points.iter().filter(|p| p.elevation.is_some()).count(),
        ..Default::default()
    };

    let outcomes: Vec<Outcome> = if workers > 1 {
        match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool.install(|| {
                points
                    .par_iter_mut()
                    .filter(|p| p.elevation.is_none())
                    .map(|p| enrich_one(p, lookup, logger))
                    .collect()
            }),
            Err(e) => {
                log_warn!(
                    logger,
                    "Could not start {} elevation workers ({}), looking up sequentially",
                    workers,
                    e
                );
                enrich_sequential(points, lookup, logger)
            }
        }
    } else {
        enrich_sequential(points, lookup, logger)
    };

    for outcome in outcomes {
        match outcome {
            Outcome::Filled => summary.filled += 1,
            Outcome::Unavailable => summary.unavailable += 1,
            Outcome::Failed => summary.failed += 1,
        }
    }
    summary
}

fn enrich_sequential(
    points: &mut [Waypoint],
    lookup: &dyn ElevationLookup,
    logger: &dyn Logger,
) -> Vec<Outcome> {
    points
        .iter_mut()
        .filter(|p| p.elevation.is_none())
        .map(|p| enrich_one(p, lookup, logger))
        .collect()
}

/// Append ` ({elevation} m)` to the name of every waypoint with an elevation.
///
/// Returns the number of renamed waypoints.
pub fn render_elevation(points: &mut [Waypoint]) -> usize {
    let mut renamed = 0;
    for point in points.iter_mut() {
        if let Some(elevation) = point.elevation {
            point.name = format!("{} ({:.0} m)", point.name, elevation);
            renamed += 1;
        }
    }
    renamed
}
