//! Elevation lookups against the Open-Meteo elevation API.

use serde::Deserialize;

use super::http::HttpClient;
use super::types::{ElevationLookup, LookupError};

/// Default elevation service endpoint.
pub const DEFAULT_ELEVATION_SERVICE: &str = "https://api.open-meteo.com/v1/elevation";

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    elevation: Vec<f64>,
}

/// Elevation lookup over HTTP.
///
/// Requests `{base_url}?latitude={lat}&longitude={lon}` and takes the first
/// value of the `elevation` array. An empty array means no elevation.
pub struct OpenMeteoLookup<C: HttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: HttpClient> OpenMeteoLookup<C> {
    /// Create a lookup against `base_url`.
    pub fn new(http_client: C, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Service endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}?latitude={:.6}&longitude={:.6}",
            self.base_url, latitude, longitude
        )
    }
}

impl<C: HttpClient> ElevationLookup for OpenMeteoLookup<C> {
    fn lookup(&self, latitude: f64, longitude: f64) -> Result<Option<f64>, LookupError> {
        let body = self.http_client.get(&self.request_url(latitude, longitude))?;
        let response: ElevationResponse = serde_json::from_slice(&body)
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;
        Ok(response.elevation.first().copied())
    }
}
