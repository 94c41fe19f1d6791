use thiserror::Error;

/// Top-level error type for the `dreamlink-api` crate.
///
/// Covers every failure mode of one device round trip: transport,
/// non-200 status, malformed XML, missing response fields, and commands
/// the box rejected. `dreamlink-core` maps these into outcomes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The device answered with a non-200 status.
    #[error("Unexpected HTTP status {code}")]
    Status { code: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// The response body was not well-formed XML.
    #[error("Malformed XML response: {message}")]
    Xml { message: String },

    /// A required field was absent from the response tree.
    #[error("Missing field {path} in response")]
    MissingField { path: String },

    // ── Protocol ────────────────────────────────────────────────────
    /// The box answered 200 but did not acknowledge the key press.
    #[error("Device rejected command {code}: e2result={result:?}")]
    CommandRejected { code: u32, result: Option<String> },
}

impl Error {
    /// The HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { code } => Some(*code),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a transient network error.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
