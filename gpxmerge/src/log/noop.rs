//! No-operation logger implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// A logger that discards all messages.
///
/// Used by library tests and by callers that only want the [`MergeReport`]
/// without per-removal diagnostics.
///
/// [`MergeReport`]: crate::merge::MergeReport
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
}
