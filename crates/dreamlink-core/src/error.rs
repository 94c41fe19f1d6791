// ── Core error types ──
//
// Device interactions report through `Outcome`, never through errors;
// `CoreError` covers only registration-time failures and is what the
// host sees from the adapter's lifecycle entry points.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid device address: {address}")]
    InvalidAddress { address: String },

    #[error("API error: {0}")]
    Api(#[from] dreamlink_api::Error),
}
