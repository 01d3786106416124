//! gpxmerge CLI - Command-line interface
//!
//! Merges the master GPX file and the addon files of the input folder into a
//! single GPX file without near-duplicate waypoints.

mod error;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use gpxmerge::config::{ConfigFile, DEFAULT_CONFIG_FILE};
use gpxmerge::merge::EliminationPolicy;

use error::CliError;
use runner::CliRunner;

#[derive(Parser, Debug)]
#[command(name = "gpxmerge")]
#[command(version = gpxmerge::VERSION)]
#[command(about = "Merge GPX waypoint files, dropping waypoints that are too close together", long_about = None)]
struct Args {
    /// Output GPX file (placed in outputFolder when given as a bare file name)
    output: PathBuf,

    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override minimumDistance (meters)
    #[arg(long)]
    minimum_distance: Option<f64>,

    /// Override gridSizeInDegree
    #[arg(long)]
    grid_size: Option<f64>,

    /// Override eliminationPolicy (original or retained)
    #[arg(long)]
    elimination_policy: Option<EliminationPolicy>,

    /// Look up missing elevations
    #[arg(long)]
    elevation_lookup: bool,

    /// Append the elevation to waypoint names
    #[arg(long)]
    render_elevation: bool,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    /// Apply command-line overrides on top of the configuration file.
    fn apply_overrides(&self, config: &mut ConfigFile) {
        if let Some(distance) = self.minimum_distance {
            config.minimum_distance = distance;
        }
        if let Some(size) = self.grid_size {
            config.grid_size_in_degree = size;
        }
        if let Some(policy) = self.elimination_policy {
            config.elimination_policy = policy;
        }
        if self.elevation_lookup {
            config.elevation_lookup = true;
        }
        if self.render_elevation {
            config.render_elevation = true;
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        e.exit();
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut config = ConfigFile::load_from(&args.config)?;
    args.apply_overrides(&mut config);

    let runner = CliRunner::new(config, args.log_file.as_deref(), args.debug)?;
    runner.log_startup();

    let summary = runner.run(&args.output)?;
    summary.print();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn base_config() -> ConfigFile {
        ConfigFile::parse("master: master.gpx\n", Path::new("gpx-merger.yaml")).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["gpxmerge", "merged.gpx"]).unwrap();
        assert_eq!(args.output, PathBuf::from("merged.gpx"));
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(!args.debug);

        let mut config = base_config();
        args.apply_overrides(&mut config);
        assert_eq!(config, base_config());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let args = Args::try_parse_from([
            "gpxmerge",
            "merged.gpx",
            "--minimum-distance",
            "25",
            "--grid-size",
            "0.005",
            "--elimination-policy",
            "retained",
            "--elevation-lookup",
            "--render-elevation",
        ])
        .unwrap();

        let mut config = base_config();
        args.apply_overrides(&mut config);

        assert_eq!(config.minimum_distance, 25.0);
        assert_eq!(config.grid_size_in_degree, 0.005);
        assert_eq!(config.elimination_policy, EliminationPolicy::Retained);
        assert!(config.elevation_lookup);
        assert!(config.render_elevation);
    }

    #[test]
    fn test_output_is_required() {
        assert!(Args::try_parse_from(["gpxmerge"]).is_err());
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(
            Args::try_parse_from(["gpxmerge", "out.gpx", "--elimination-policy", "strict"])
                .is_err()
        );
    }
}
