//! CLI runner for the merge pipeline.
//!
//! Encapsulates logging initialization and the read / merge / enrich / write
//! sequence driven by the configuration file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use gpxmerge::config::ConfigFile;
use gpxmerge::elevation::{
    enrich_elevations, render_elevation, ElevationLookup, EnrichmentSummary, OpenMeteoLookup,
    ReqwestClient,
};
use gpxmerge::gpx::{source_name, GpxDocument};
use gpxmerge::log::{Logger, TracingLogger};
use gpxmerge::logging::{init_logging, LoggingGuard};
use gpxmerge::merge::{MergeReport, MergeSession};
use gpxmerge::names::NamePatterns;
use gpxmerge::sources::discover_sources;

use crate::error::CliError;

/// Result of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub report: MergeReport,
    /// Addon files skipped because they could not be read
    pub skipped_sources: Vec<PathBuf>,
    pub enrichment: Option<EnrichmentSummary>,
}

impl RunSummary {
    /// Print the end-of-run summary to stdout.
    pub fn print(&self) {
        let report = &self.report;
        println!();
        println!("Master: {} waypoints", report.master_waypoints);
        for source in &report.sources {
            println!(
                "  + {}: {} accepted, {} discarded",
                source.name, source.accepted, source.discarded
            );
        }
        for path in &self.skipped_sources {
            println!("  ! {}: skipped", path.display());
        }
        println!(
            "Merged: {} waypoints in {} cells",
            report.merged_waypoints, report.cell_count
        );
        println!("Removed as too close: {}", report.removals.len());
        if let Some(closest) = report.closest_retained_m {
            println!("Closest retained pair: {:.1} m", closest);
        }
        if let Some(enrichment) = &self.enrichment {
            println!(
                "Elevation: {} filled, {} unavailable, {} failed",
                enrichment.filled, enrichment.unavailable, enrichment.failed
            );
        }
        println!(
            "✓ Wrote {} waypoints to {}",
            report.output_waypoints,
            self.output_path.display()
        );
    }
}

/// Runner that manages CLI lifecycle and the merge pipeline.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
    logger: Arc<dyn Logger>,
}

impl CliRunner {
    /// Create a runner for `config`, initializing logging.
    ///
    /// # Arguments
    ///
    /// * `log_file` - Optional log file in addition to stdout
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn new(config: ConfigFile, log_file: Option<&Path>, debug_mode: bool) -> Result<Self, CliError> {
        let logging_guard = init_logging(log_file, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            logger: Arc::new(TracingLogger),
        })
    }

    /// Log startup information.
    pub fn log_startup(&self) {
        info!("gpxmerge v{}", gpxmerge::VERSION);
        info!(
            "Minimum distance {} m, grid {}°, {} elimination",
            self.config.minimum_distance,
            self.config.grid_size_in_degree,
            self.config.elimination_policy
        );
    }

    /// Run the merge and write the result to `output`.
    pub fn run(&self, output: &Path) -> Result<RunSummary, CliError> {
        let lookup = if self.config.elevation_lookup {
            let client = ReqwestClient::new()?;
            Some(OpenMeteoLookup::new(
                client,
                self.config.elevation_service.clone(),
            ))
        } else {
            None
        };

        run_pipeline(
            &self.config,
            output,
            lookup.as_ref().map(|l| l as &dyn ElevationLookup),
            self.logger.clone(),
        )
    }
}

/// Read, merge, enrich and write, in that order.
///
/// `lookup` is only used when elevation lookup is enabled in `config`.
pub fn run_pipeline(
    config: &ConfigFile,
    output: &Path,
    lookup: Option<&dyn ElevationLookup>,
    logger: Arc<dyn Logger>,
) -> Result<RunSummary, CliError> {
    for warning in config.validate()? {
        warn!("{}", warning);
    }
    let patterns = config
        .name_patterns()
        .map_err(|e| CliError::Config(e.into()))?;

    let mut master_doc = GpxDocument::read(&config.master)?;
    let mut master = master_doc.waypoints();
    patterns.apply_all(&master_doc.file_name(), &mut master);
    info!(
        "Master {}: {} waypoints, {} tracks, {} routes",
        master_doc.path().display(),
        master.len(),
        master_doc.track_count(),
        master_doc.route_count()
    );

    let output_path = config.output_path(output);
    let sources = discover_sources(&config.input_folder, &[&config.master, &output_path])?;
    info!(
        "Found {} addon files in {}",
        sources.len(),
        config.input_folder.display()
    );

    let mut session = MergeSession::new(master, config.merge_config(), logger.clone());
    let mut skipped_sources = Vec::new();

    for path in sources {
        match read_source(&path, &patterns) {
            Ok(waypoints) => {
                session.merge_source(&source_name(&path), waypoints);
            }
            Err(e) if config.skip_invalid_sources => {
                warn!("Skipping {}", e);
                skipped_sources.push(path);
            }
            Err(e) => return Err(e.into()),
        }
    }

    let outcome = session.finish();
    let mut waypoints = outcome.waypoints;

    let enrichment = match lookup {
        Some(lookup) if config.elevation_lookup => {
            let summary = enrich_elevations(
                &mut waypoints,
                lookup,
                config.elevation_workers,
                logger.as_ref(),
            );
            info!(
                "Elevation lookup: {} requested, {} filled",
                summary.requested(),
                summary.filled
            );
            Some(summary)
        }
        _ => None,
    };

    if config.render_elevation {
        render_elevation(&mut waypoints);
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|error| CliError::FileWrite {
            path: parent.to_path_buf(),
            error,
        })?;
    }
    master_doc.replace_waypoints(&waypoints);
    master_doc.write(&output_path)?;
    info!(
        "Wrote {} waypoints to {}",
        waypoints.len(),
        output_path.display()
    );

    Ok(RunSummary {
        output_path,
        report: outcome.report,
        skipped_sources,
        enrichment,
    })
}

fn read_source(
    path: &Path,
    patterns: &NamePatterns,
) -> Result<Vec<gpxmerge::waypoint::Waypoint>, gpxmerge::gpx::GpxError> {
    let doc = GpxDocument::read(path)?;
    let mut waypoints = doc.waypoints();
    patterns.apply_all(&doc.file_name(), &mut waypoints);
    Ok(waypoints)
}
