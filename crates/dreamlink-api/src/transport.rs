// Shared transport configuration for building reqwest::Client instances.
//
// The adapter builds one client and shares it across all configured
// devices; per-device credentials are applied per request.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::error::Error;

/// Transport configuration for building HTTP clients.
///
/// The device wire protocol requires `Accept: application/xml` on every
/// request, so it is installed as a default header here. The timeout is
/// always finite; a hung box must not pin a dispatch forever.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/xml"));

        reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .user_agent("dreamlink/0.1.0")
            .build()
            .map_err(Error::Transport)
    }
}
