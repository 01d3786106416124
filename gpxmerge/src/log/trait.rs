//! Logger trait definition.

use std::fmt::Arguments;

/// Severity of a merge diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Per-point detail (lookup results, closest pair)
    Debug,
    /// Progress and removal lines
    Info,
    /// Recoverable problems (failed lookups, skipped sources)
    Warn,
}

/// Logging interface for merge components.
///
/// Components receive an `Arc<dyn Logger>` (or `&dyn Logger`) and never call
/// `tracing` themselves, which lets tests capture the removal lines.
///
/// Implementations must be `Send + Sync` because elevation lookups may run on
/// a worker pool.
///
/// ```
/// use std::fmt::Arguments;
/// use std::sync::Mutex;
/// use gpxmerge::log::{LogLevel, Logger};
/// use gpxmerge::log_warn;
///
/// struct Collect(Mutex<Vec<String>>);
///
/// impl Logger for Collect {
///     fn log(&self, _level: LogLevel, args: Arguments<'_>) {
///         self.0.lock().unwrap().push(args.to_string());
///     }
/// }
///
/// let logger = Collect(Mutex::new(Vec::new()));
/// log_warn!(logger, "Skipping {}", "broken.gpx");
/// assert_eq!(logger.0.lock().unwrap()[0], "Skipping broken.gpx");
/// ```
pub trait Logger: Send + Sync {
    /// Log a message at the specified level.
    ///
    /// The only required method; `debug`, `info` and `warn` forward here.
    fn log(&self, level: LogLevel, args: Arguments<'_>);

    /// Log a debug-level message.
    fn debug(&self, args: Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    /// Log an info-level message.
    fn info(&self, args: Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    /// Log a warning.
    fn warn(&self, args: Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }
}

/// `log_debug!(logger, "fmt", args..)` on any [`Logger`].
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

/// `log_info!(logger, "fmt", args..)` on any [`Logger`].
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

/// `log_warn!(logger, "fmt", args..)` on any [`Logger`].
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}
