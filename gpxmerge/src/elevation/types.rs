//! Elevation lookup interface and errors.

/// Errors from a single elevation lookup.
///
/// Lookup errors are never fatal to a merge; the affected waypoint is left
/// without an elevation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    /// Transport failure or non-success HTTP status
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a body that could not be understood
    #[error("Invalid elevation response: {0}")]
    InvalidResponse(String),
}

/// Source of terrain elevations.
///
/// Implementations must be shareable across the enrichment worker pool.
pub trait ElevationLookup: Send + Sync {
    /// Elevation in meters at the given coordinates.
    ///
    /// `Ok(None)` means the service has no value for this location.
    fn lookup(&self, latitude: f64, longitude: f64) -> Result<Option<f64>, LookupError>;
}

impl<T: ElevationLookup + ?Sized> ElevationLookup for std::sync::Arc<T> {
    fn lookup(&self, latitude: f64, longitude: f64) -> Result<Option<f64>, LookupError> {
        (**self).lookup(latitude, longitude)
    }
}
