//! Logging infrastructure for gpxmerge.
//!
//! Installs a `tracing` subscriber with:
//! - a compact stdout layer for progress and removal lines
//! - an optional plain-text log file (cleared at the start of each run)
//! - an `EnvFilter` honouring `RUST_LOG`, defaulting to `info`

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging.
///
/// # Arguments
///
/// * `log_file` - Optional log file; its directory is created and the file
///   truncated before logging starts
/// * `debug` - Forces the `debug` level regardless of `RUST_LOG`
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(log_file: Option<&Path>, debug: bool) -> Result<LoggingGuard, io::Error> {
    let env_filter = build_filter(debug);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_target(false)
        .without_time()
        .compact();

    let (file_layer, file_guard) = match log_file {
        Some(path) => {
            let (dir, name) = split_log_path(path);
            fs::create_dir_all(&dir)?;
            fs::write(dir.join(&name), "")?;

            let appender = tracing_appender::rolling::never(&dir, &name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn build_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Split a log path into directory and file name, defaulting to the current
/// directory and `gpxmerge.log`.
fn split_log_path(path: &Path) -> (std::path::PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| default_log_file().to_string());
    (dir, name)
}

/// Default log file name.
pub fn default_log_file() -> &'static str {
    "gpxmerge.log"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_split_log_path_with_directory() {
        let (dir, name) = split_log_path(Path::new("logs/merge.log"));
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(name, "merge.log");
    }

    #[test]
    fn test_split_log_path_bare_file_uses_current_dir() {
        let (dir, name) = split_log_path(Path::new("merge.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "merge.log");
    }

    #[test]
    fn test_split_log_path_without_file_name_uses_default() {
        let (_, name) = split_log_path(Path::new("/"));
        assert_eq!(name, default_log_file());
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let _logging_guard = LoggingGuard {
            _file_guard: Some(guard),
        };
    }

    // init_logging installs a global subscriber and can only run once per
    // process, so it is exercised by the CLI rather than here.
}
