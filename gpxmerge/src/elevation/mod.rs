//! Elevation enrichment.
//!
//! After the merge, waypoints without an elevation can be completed from an
//! [`ElevationLookup`]. The production lookup is [`OpenMeteoLookup`] over a
//! blocking [`ReqwestClient`]; tests plug in stubs.
//!
//! ```
//! use gpxmerge::elevation::{enrich_elevations, ElevationLookup, LookupError};
//! use gpxmerge::log::NoOpLogger;
//! use gpxmerge::waypoint::Waypoint;
//!
//! struct Flat;
//! impl ElevationLookup for Flat {
//!     fn lookup(&self, _: f64, _: f64) -> Result<Option<f64>, LookupError> {
//!         Ok(Some(100.0))
//!     }
//! }
//!
//! let mut points = vec![
//!     Waypoint::new("A", 45.0, 7.0),
//!     Waypoint::new("B", 45.1, 7.1).with_elevation(2000.0),
//! ];
//! let summary = enrich_elevations(&mut points, &Flat, 1, &NoOpLogger);
//! assert_eq!(summary.filled, 1);
//! assert_eq!(points[1].elevation, Some(2000.0));
//! ```

mod enrich;
mod http;
mod open_meteo;
mod types;

pub use enrich::{enrich_elevations, render_elevation, EnrichmentSummary};
pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use open_meteo::{OpenMeteoLookup, DEFAULT_ELEVATION_SERVICE};
pub use types::{ElevationLookup, LookupError};
