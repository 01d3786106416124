//! HTTP client abstraction for testability

use super::types::LookupError;
use tracing::{debug, trace, warn};

/// Trait for blocking HTTP GET requests.
///
/// Lets elevation services be tested with a mock client.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request and returns the response body.
    fn get(&self, url: &str) -> Result<Vec<u8>, LookupError>;
}

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("gpxmerge/", env!("CARGO_PKG_VERSION"));

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LookupError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, LookupError> {
        trace!(url = url, "HTTP GET request starting");

        let response = self.client.get(url).send().map_err(|e| {
            warn!(
                url = url,
                error = %e,
                is_timeout = e.is_timeout(),
                "HTTP request failed"
            );
            LookupError::Http(format!("Request failed: {}", e))
        })?;

        debug!(
            url = url,
            status = response.status().as_u16(),
            "HTTP response received"
        );

        // Check HTTP status
        if !response.status().is_success() {
            return Err(LookupError::Http(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| LookupError::Http(format!("Failed to read response: {}", e)))
    }
}
