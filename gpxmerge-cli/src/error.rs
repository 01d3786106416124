//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use gpxmerge::config::{ConfigFileError, DEFAULT_CONFIG_FILE};
use gpxmerge::elevation::LookupError;
use gpxmerge::gpx::GpxError;
use gpxmerge::sources::SourceError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file missing, malformed or invalid
    Config(ConfigFileError),
    /// Failed to read or write a GPX file
    Gpx(GpxError),
    /// Failed to list the input folder
    Sources(SourceError),
    /// Failed to set up the elevation service client
    Elevation(LookupError),
    /// Failed to prepare the output location
    FileWrite { path: PathBuf, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Config(ConfigFileError::NotFound(_)) => {
                eprintln!();
                eprintln!(
                    "Create {} in the working directory or pass --config <path>.",
                    DEFAULT_CONFIG_FILE
                );
                eprintln!("The only required key is 'master', the path of the master GPX file.");
            }
            CliError::Config(ConfigFileError::Pattern(_)) => {
                eprintln!();
                eprintln!("Name patterns use named groups: (?P<Prenom>..), (?P<Name>..),");
                eprintln!("(?P<Countries>..) and (?P<Ele>..).");
            }
            CliError::Gpx(GpxError::InvalidWaypoint { .. }) => {
                eprintln!();
                eprintln!("Latitudes must be within -90..90 and longitudes within -180..180.");
                eprintln!("Set 'skipInvalidSources: true' to skip unreadable addon files.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Gpx(e) => write!(f, "{}", e),
            CliError::Sources(e) => write!(f, "{}", e),
            CliError::Elevation(e) => write!(f, "Failed to set up elevation lookup: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write '{}': {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Gpx(e) => Some(e),
            CliError::Sources(e) => Some(e),
            CliError::Elevation(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            CliError::LoggingInit(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<GpxError> for CliError {
    fn from(e: GpxError) -> Self {
        CliError::Gpx(e)
    }
}

impl From<SourceError> for CliError {
    fn from(e: SourceError) -> Self {
        CliError::Sources(e)
    }
}

impl From<LookupError> for CliError {
    fn from(e: LookupError) -> Self {
        CliError::Elevation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_config_error_message_is_passed_through() {
        let err = CliError::from(ConfigFileError::NotFound(PathBuf::from("gpx-merger.yaml")));
        assert_eq!(err.to_string(), "Config file not found: gpx-merger.yaml");
    }

    #[test]
    fn test_gpx_error_has_source() {
        let err = CliError::from(GpxError::Parse {
            path: Path::new("huts.gpx").to_path_buf(),
            message: "unexpected end".to_string(),
        });
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("huts.gpx"));
    }
}
