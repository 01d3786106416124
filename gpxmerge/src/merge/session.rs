//! Merge session: master grid, addon merge-in passes and final cleanup.

use std::sync::Arc;

use crate::grid::{MergeInStats, WaypointGrid};
use crate::log::Logger;
use crate::waypoint::Waypoint;
use crate::{log_debug, log_info};

use super::config::MergeConfig;
use super::eliminate::{eliminate_closeby, Removal};

/// Per-source merge counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    /// Source name (file name for GPX sources)
    pub name: String,
    /// Waypoints offered by the source
    pub waypoints: usize,
    /// Waypoints admitted into the grid
    pub accepted: usize,
    /// Waypoints dropped as same-cell duplicates
    pub discarded: usize,
}

/// Summary of a complete merge run.
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    pub master_waypoints: usize,
    pub sources: Vec<SourceReport>,
    /// Points in the grid after all merge-in passes
    pub merged_waypoints: usize,
    /// Non-empty grid cells after all merge-in passes
    pub cell_count: usize,
    pub removals: Vec<Removal>,
    pub closest_retained_m: Option<f64>,
    pub output_waypoints: usize,
}

/// Final waypoints together with the run summary.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub waypoints: Vec<Waypoint>,
    pub report: MergeReport,
}

/// A merge in progress.
///
/// The session owns the grid from the moment the master set is loaded until
/// [`finish`](Self::finish) flattens it and runs the elimination pass. Addon
/// sources are merged in the order they are passed to
/// [`merge_source`](Self::merge_source).
pub struct MergeSession {
    config: MergeConfig,
    grid: WaypointGrid,
    report: MergeReport,
    logger: Arc<dyn Logger>,
}

impl MergeSession {
    /// Start a session by building the grid from the master waypoints.
    pub fn new(master: Vec<Waypoint>, config: MergeConfig, logger: Arc<dyn Logger>) -> Self {
        let master_waypoints = master.len();
        let grid = WaypointGrid::build(master, config.grid_size_degrees);

        log_info!(
            logger,
            "Master spatial grid: {} waypoints in {} cells",
            master_waypoints,
            grid.cell_count()
        );

        Self {
            config,
            grid,
            report: MergeReport {
                master_waypoints,
                ..Default::default()
            },
            logger,
        }
    }

    /// Merge one addon source into the grid.
    pub fn merge_source(&mut self, name: &str, waypoints: Vec<Waypoint>) -> MergeInStats {
        let offered = waypoints.len();
        let stats = self
            .grid
            .merge_in(waypoints, self.config.minimum_distance_m);

        log_info!(
            self.logger,
            "Addon {}: {} waypoints, {} accepted, {} discarded (grid now {} cells)",
            name,
            offered,
            stats.accepted,
            stats.discarded,
            self.grid.cell_count()
        );

        self.report.sources.push(SourceReport {
            name: name.to_string(),
            waypoints: offered,
            accepted: stats.accepted,
            discarded: stats.discarded,
        });

        stats
    }

    /// The grid as it currently stands.
    pub fn grid(&self) -> &WaypointGrid {
        &self.grid
    }

    /// Flatten the grid, run the elimination pass and return the result.
    pub fn finish(self) -> MergeOutcome {
        let mut report = self.report;
        report.merged_waypoints = self.grid.len();
        report.cell_count = self.grid.cell_count();

        log_debug!(
            self.logger,
            "Running closeness elimination over {} waypoints ({} policy)",
            report.merged_waypoints,
            self.config.policy
        );

        let result = eliminate_closeby(
            &self.grid,
            self.config.minimum_distance_m,
            self.config.policy,
            self.logger.as_ref(),
        );

        report.removals = result.removals;
        report.closest_retained_m = result.closest_retained_m;
        report.output_waypoints = result.retained.len();

        if let Some(closest) = report.closest_retained_m {
            log_debug!(self.logger, "Closest retained pair: {:.1} m", closest);
        }

        MergeOutcome {
            waypoints: result.retained,
            report,
        }
    }
}

/// Run a full merge over in-memory sources.
///
/// Convenience wrapper around [`MergeSession`] for callers that already hold
/// every source.
pub fn merge_sources<S>(
    master: Vec<Waypoint>,
    sources: impl IntoIterator<Item = (S, Vec<Waypoint>)>,
    config: MergeConfig,
    logger: Arc<dyn Logger>,
) -> MergeOutcome
where
    S: AsRef<str>,
{
    let mut session = MergeSession::new(master, config, logger);
    for (name, waypoints) in sources {
        session.merge_source(name.as_ref(), waypoints);
    }
    session.finish()
}
