//! CLI-owned configuration: TOML device profiles and flag resolution.
//!
//! Core never sees these types; it receives a pre-built `Device` and
//! `AdapterConfig`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use dreamlink_api::TransportConfig;
use dreamlink_core::AdapterConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when --device is not specified.
    pub default_device: Option<String>,

    /// Named device profiles.
    #[serde(default)]
    pub devices: HashMap<String, Profile>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Receiver address, `host[:port]`.
    pub host: String,

    /// Web-interface username.
    pub username: Option<String>,

    /// Web-interface password (plaintext; prefer DREAMLINK_PASSWORD).
    pub password: Option<String>,

    /// Request timeout override, seconds.
    pub timeout: Option<u64>,

    /// Reconciliation interval override, seconds.
    pub poll_interval: Option<u64>,
}

/// Everything needed to talk to one receiver.
#[derive(Debug)]
pub struct ResolvedDevice {
    pub address: String,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub adapter: AdapterConfig,
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "dreamlink", "dreamlink")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("dreamlink");
            p.push("config.toml");
            p
        })
}

// ── Config loading ───────────────────────────────────────────────────

pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("DREAMLINK_CONFIG_"));

    Ok(figment.extract()?)
}

// ── Device resolution ────────────────────────────────────────────────

/// Resolve the target receiver from CLI flags, environment, and the
/// config file. Flags win over the profile.
pub fn resolve_device(global: &GlobalOpts) -> Result<ResolvedDevice, CliError> {
    let config = load_config()?;

    let profile = match &global.device {
        Some(name) => Some(config.devices.get(name).ok_or_else(|| {
            CliError::UnknownProfile {
                name: name.clone(),
                path: config_path().display().to_string(),
            }
        })?),
        None => config
            .default_device
            .as_ref()
            .and_then(|name| config.devices.get(name)),
    };

    let address = global
        .host
        .clone()
        .or_else(|| profile.map(|p| p.host.clone()))
        .ok_or_else(|| CliError::NoDevice {
            path: config_path().display().to_string(),
        })?;

    let username = global
        .username
        .clone()
        .or_else(|| profile.and_then(|p| p.username.clone()));
    let password = global
        .password
        .clone()
        .or_else(|| profile.and_then(|p| p.password.clone()))
        .map(SecretString::from);

    let mut adapter = AdapterConfig::default();
    if let Some(secs) = global.timeout.or_else(|| profile.and_then(|p| p.timeout)) {
        if secs == 0 {
            return Err(CliError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        adapter.transport.timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = profile.and_then(|p| p.poll_interval) {
        if secs == 0 {
            return Err(CliError::Validation {
                field: "poll_interval".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        adapter.poll_interval = Duration::from_secs(secs);
    }

    Ok(ResolvedDevice {
        address,
        username,
        password,
        adapter,
    })
}

impl ResolvedDevice {
    pub fn transport(&self) -> &TransportConfig {
        &self.adapter.transport
    }
}
