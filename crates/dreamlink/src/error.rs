//! CLI error types with miette diagnostics.
//!
//! Wraps core and API errors into user-facing reports with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use dreamlink_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("No receiver configured")]
    #[diagnostic(
        code(dreamlink::no_device),
        help(
            "Pass --host <HOST>, set DREAMLINK_HOST, or add a device profile to:\n{path}"
        )
    )]
    NoDevice { path: String },

    #[error("No device profile named '{name}'")]
    #[diagnostic(
        code(dreamlink::unknown_profile),
        help("Profiles are defined in {path}")
    )]
    UnknownProfile { name: String, path: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(dreamlink::validation))]
    Validation { field: String, reason: String },

    #[error("Could not load configuration")]
    #[diagnostic(code(dreamlink::config))]
    Config(#[from] figment::Error),

    #[error("Unknown key '{name}'")]
    #[diagnostic(
        code(dreamlink::unknown_key),
        help("Run: dreamlink keys (add --extended for the low-level KEY_* names)")
    )]
    UnknownKey { name: String },

    #[error("Receiver rejected the request: {detail}")]
    #[diagnostic(code(dreamlink::device_failure))]
    DeviceFailure { detail: String },

    #[error(transparent)]
    #[diagnostic(code(dreamlink::api))]
    Api(#[from] dreamlink_api::Error),

    #[error(transparent)]
    #[diagnostic(code(dreamlink::core))]
    Core(#[from] CoreError),

    #[error(transparent)]
    #[diagnostic(code(dreamlink::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map an error to its process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoDevice { .. } | Self::Validation { .. } => exit_code::USAGE,
            Self::UnknownProfile { .. } | Self::UnknownKey { .. } => exit_code::NOT_FOUND,
            Self::Api(err) if err.is_transient() => exit_code::CONNECTION,
            Self::Core(CoreError::Api(err)) if err.is_transient() => exit_code::CONNECTION,
            _ => exit_code::GENERAL,
        }
    }
}
