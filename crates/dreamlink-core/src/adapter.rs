// ── Adapter lifecycle ──
//
// The host-facing entry point. Owns the device registry, the shared
// HTTP client, and the reconciliation task. Cheaply cloneable via
// `Arc<AdapterInner>`; all host notifications (device add/remove,
// subscribe/unsubscribe, standby transitions) land here.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::AdapterConfig;
use crate::dispatcher::{self, RemoteCommand};
use crate::error::CoreError;
use crate::host::HostHandle;
use crate::model::{Attribute, Device, Outcome, OutcomeStatus};
use crate::reconciler;
use crate::registry::{DeviceEntry, DeviceRegistry};

struct PollTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// The remote-control adapter.
#[derive(Clone)]
pub struct Adapter {
    inner: Arc<AdapterInner>,
}

struct AdapterInner {
    config: AdapterConfig,
    http: reqwest::Client,
    registry: Arc<DeviceRegistry>,
    host: Arc<dyn HostHandle>,
    poll: Mutex<Option<PollTask>>,
}

impl Adapter {
    /// Create an adapter. Does not start reconciliation — call
    /// [`start_polling()`](Self::start_polling) once devices are
    /// registered.
    pub fn new(config: AdapterConfig, host: Arc<dyn HostHandle>) -> Result<Self, CoreError> {
        let http = config.transport.build_client()?;
        Ok(Self {
            inner: Arc::new(AdapterInner {
                config,
                http,
                registry: Arc::new(DeviceRegistry::default()),
                host,
                poll: Mutex::new(None),
            }),
        })
    }

    /// Access the adapter configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.inner.config
    }

    // ── Device registry notifications ────────────────────────────

    /// Register a configured device and push its current power state
    /// to the host, best effort.
    pub async fn add_device(&self, device: Device) -> Result<(), CoreError> {
        let entry = DeviceEntry::new(device, &self.inner.http)?;
        info!(device = %entry.device.id, address = %entry.device.address, "device registered");

        let outcome = entry.executor.power_state().await;
        self.inner.registry.insert(entry);

        if let Outcome::Remote(remote) = outcome {
            match (remote.status, remote.state) {
                (OutcomeStatus::Ok, Some(state)) => {
                    self.inner.host.push_attribute(
                        &remote.entity_id,
                        Attribute::RemoteState,
                        state.as_str(),
                    );
                }
                _ => {
                    warn!(
                        entity = %remote.entity_id,
                        error = remote.error.as_deref().unwrap_or("no state reported"),
                        "initial power state unavailable"
                    );
                }
            }
        }
        Ok(())
    }

    /// Drop a device from the registry.
    pub fn remove_device(&self, id: &str) {
        if self.inner.registry.remove(id) {
            debug!(device = id, "device removed");
        }
    }

    /// Drop every device and subscription (configuration cleared).
    pub fn clear_devices(&self) {
        self.inner.registry.clear();
        debug!("configuration cleared, all devices removed");
    }

    /// Mark an entity as subscribed; its device joins reconciliation.
    pub fn subscribe(&self, entity_id: &str) {
        self.inner.registry.subscribe(entity_id);
        debug!(entity = entity_id, "entity subscribed");
    }

    /// Mark an entity as unsubscribed.
    pub fn unsubscribe(&self, entity_id: &str) {
        self.inner.registry.unsubscribe(entity_id);
        debug!(entity = entity_id, "entity unsubscribed");
    }

    // ── Command dispatch ─────────────────────────────────────────

    /// Execute a remote command against a registered device.
    ///
    /// Never fails: missing devices and unresolvable commands come
    /// back as not-found outcomes, device failures as server-error
    /// outcomes.
    pub async fn dispatch(&self, entity_id: &str, command: RemoteCommand) -> Outcome {
        let Some(entry) = self.inner.registry.get(entity_id) else {
            warn!(entity = entity_id, "dispatch for unknown device");
            return Outcome::NotFound {
                entity_id: entity_id.to_owned(),
            };
        };
        dispatcher::dispatch(&entry.executor, self.inner.host.as_ref(), command).await
    }

    // ── Reconciliation lifecycle ─────────────────────────────────

    /// Start the periodic state-reconciliation loop. No-op when it is
    /// already running.
    pub async fn start_polling(&self) {
        let mut poll = self.inner.poll.lock().await;
        if poll.is_some() {
            return;
        }

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(reconciler::reconcile_task(
            Arc::clone(&self.inner.registry),
            Arc::clone(&self.inner.host),
            self.inner.config.poll_interval,
            cancel.clone(),
        ));
        *poll = Some(PollTask { cancel, handle });
        debug!(
            period_secs = self.inner.config.poll_interval.as_secs(),
            "reconciliation started"
        );
    }

    /// Suspend reconciliation (adapter entering standby). Future ticks
    /// are cancelled; an in-flight device call is left to finish or
    /// time out on its own.
    pub async fn enter_standby(&self) {
        if let Some(poll) = self.inner.poll.lock().await.take() {
            poll.cancel.cancel();
            if let Err(err) = poll.handle.await {
                warn!(%err, "reconciliation task did not stop cleanly");
            }
            debug!("reconciliation suspended");
        }
    }

    /// Resume reconciliation at the full interval; missed ticks are
    /// not caught up.
    pub async fn exit_standby(&self) {
        self.start_polling().await;
    }
}
