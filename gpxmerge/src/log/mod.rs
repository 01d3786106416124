//! Logging abstraction layer.
//!
//! Merge components report progress and removals through the [`Logger`] trait
//! instead of calling `tracing` directly, so tests can capture or silence the
//! output.
//!
//! - [`Logger`]: the interface components log through
//! - [`TracingLogger`]: forwards to the `tracing` crate (used by the CLI)
//! - [`NoOpLogger`]: discards everything
//!
//! ```
//! use gpxmerge::log::{Logger, NoOpLogger};
//! use gpxmerge::log_info;
//! use std::sync::Arc;
//!
//! let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
//! log_info!(logger, "Merged {} waypoints", 42);
//! ```

mod noop;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
