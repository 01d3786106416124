//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger implementation that delegates to the `tracing` crate.
///
/// Messages end up wherever the subscriber installed by
/// [`init_logging`](crate::logging::init_logging) sends them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing logger adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", args),
            LogLevel::Info => tracing::info!("{}", args),
            LogLevel::Warn => tracing::warn!("{}", args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingLogger>();
    }

    #[test]
    fn test_tracing_logger_without_subscriber_does_not_panic() {
        let logger: Box<dyn Logger> = Box::new(TracingLogger::new());
        crate::log_info!(logger, "Addon {}: {} waypoints", "alps.gpx", 12);
        crate::log_debug!(logger, "Closest retained pair: {:.1} m", 51.2);
    }
}
