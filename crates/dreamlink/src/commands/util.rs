//! Shared helpers for command handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dreamlink_api::DreamboxClient;
use dreamlink_core::{Adapter, Attribute, Device, HostHandle, Outcome, OutcomeStatus, RemoteState};

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;

/// Host implementation for the CLI: prints attribute pushes and keeps
/// the cache the reconciler compares against.
pub struct CliHost {
    quiet: bool,
    cache: Mutex<HashMap<String, RemoteState>>,
}

impl CliHost {
    fn new(quiet: bool) -> Self {
        Self {
            quiet,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

impl HostHandle for CliHost {
    fn push_attribute(&self, entity_id: &str, attribute: Attribute, value: &str) {
        if !self.quiet {
            println!("{entity_id} {}={value}", attribute.as_str());
        }

        if attribute == Attribute::RemoteState {
            let state = match value {
                "on" => RemoteState::On,
                "off" => RemoteState::Off,
                _ => RemoteState::Unknown,
            };
            if let Ok(mut cache) = self.cache.lock() {
                cache.insert(entity_id.to_owned(), state);
            }
        }
    }

    fn cached_remote_state(&self, entity_id: &str) -> Option<RemoteState> {
        self.cache.lock().ok()?.get(entity_id).copied()
    }
}

/// A connected adapter with its single registered receiver.
pub struct Session {
    pub adapter: Adapter,
    pub entity_id: String,
}

/// Build a bare API client for read-only commands.
pub fn client_for(global: &GlobalOpts) -> Result<DreamboxClient, CliError> {
    let resolved = config::resolve_device(global)?;
    Ok(DreamboxClient::new(
        &resolved.address,
        resolved.username.clone(),
        resolved.password.clone(),
        resolved.transport(),
    )?)
}

/// Resolve the target receiver, identify it, and register it with a
/// fresh adapter.
pub async fn connect(
    global: &GlobalOpts,
    poll_interval: Option<Duration>,
) -> Result<Session, CliError> {
    let mut resolved = config::resolve_device(global)?;
    if let Some(interval) = poll_interval {
        resolved.adapter.poll_interval = interval;
    }

    let client = DreamboxClient::new(
        &resolved.address,
        resolved.username.clone(),
        resolved.password.clone(),
        resolved.transport(),
    )?;
    let info = client.device_info().await?;
    let entity_id = info.entity_id();

    let host = Arc::new(CliHost::new(global.quiet));
    let adapter = Adapter::new(resolved.adapter.clone(), host as Arc<dyn HostHandle>)?;
    adapter
        .add_device(Device {
            id: entity_id.clone(),
            address: resolved.address,
            name: info.name,
            username: resolved.username,
            password: resolved.password,
        })
        .await?;

    Ok(Session { adapter, entity_id })
}

/// Turn a dispatch outcome into process output and exit status.
pub fn finish(outcome: &Outcome, requested: &str, quiet: bool) -> Result<(), CliError> {
    match outcome.status() {
        OutcomeStatus::Ok => {
            // State-bearing outcomes were already printed by the host.
            if !quiet && outcome.attribute_update().is_none() {
                println!("ok");
            }
            Ok(())
        }
        OutcomeStatus::ServerError => Err(CliError::DeviceFailure {
            detail: outcome.error().unwrap_or("no detail from receiver").into(),
        }),
        OutcomeStatus::NotFound => Err(CliError::UnknownKey {
            name: requested.into(),
        }),
    }
}

pub fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}
