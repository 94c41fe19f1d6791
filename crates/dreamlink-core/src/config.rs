// ── Runtime adapter configuration ──
//
// Built by the host and handed to `Adapter::new`; the core never
// reads config files.

use std::time::Duration;

use dreamlink_api::TransportConfig;

/// Configuration for one adapter instance.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// HTTP transport tuning shared by all devices.
    pub transport: TransportConfig,
    /// Period of the state-reconciliation loop.
    pub poll_interval: Duration,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            transport: TransportConfig::default(),
            poll_interval: Duration::from_secs(60),
        }
    }
}
