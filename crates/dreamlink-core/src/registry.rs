// ── Device registry and subscription set ──
//
// Explicitly owned registry shared by the dispatcher and reconciler.
// Populated and cleared only through the adapter's host-notification
// entry points; the reconciler only reads it.

use std::sync::Arc;

use dashmap::DashMap;
use url::Url;

use crate::error::CoreError;
use crate::executor::CommandExecutor;
use crate::model::Device;

/// One registered device together with its ready-to-use executor.
pub(crate) struct DeviceEntry {
    pub(crate) device: Device,
    pub(crate) executor: CommandExecutor,
}

impl DeviceEntry {
    pub(crate) fn new(device: Device, http: &reqwest::Client) -> Result<Self, CoreError> {
        let base_url =
            Url::parse(&format!("http://{}/", device.address)).map_err(|_| {
                CoreError::InvalidAddress {
                    address: device.address.clone(),
                }
            })?;
        let executor = CommandExecutor::new(
            http.clone(),
            base_url,
            device.id.clone(),
            device.username.clone(),
            device.password.clone(),
        );
        Ok(Self { device, executor })
    }
}

#[derive(Default)]
pub(crate) struct DeviceRegistry {
    devices: DashMap<String, Arc<DeviceEntry>>,
    subscriptions: DashMap<String, bool>,
}

impl DeviceRegistry {
    pub(crate) fn insert(&self, entry: DeviceEntry) {
        self.devices.insert(entry.device.id.clone(), Arc::new(entry));
    }

    pub(crate) fn remove(&self, id: &str) -> bool {
        self.subscriptions.remove(id);
        self.devices.remove(id).is_some()
    }

    pub(crate) fn clear(&self) {
        self.devices.clear();
        self.subscriptions.clear();
    }

    pub(crate) fn get(&self, id: &str) -> Option<Arc<DeviceEntry>> {
        self.devices.get(id).map(|entry| Arc::clone(&entry))
    }

    pub(crate) fn subscribe(&self, entity_id: &str) {
        self.subscriptions.insert(entity_id.to_owned(), true);
    }

    pub(crate) fn unsubscribe(&self, entity_id: &str) {
        self.subscriptions.insert(entity_id.to_owned(), false);
    }

    pub(crate) fn is_subscribed(&self, entity_id: &str) -> bool {
        self.subscriptions
            .get(entity_id)
            .is_some_and(|flag| *flag)
    }

    /// Devices with at least one subscribed entity, for reconciliation.
    pub(crate) fn subscribed_entries(&self) -> Vec<Arc<DeviceEntry>> {
        self.devices
            .iter()
            .filter(|entry| self.is_subscribed(entry.key()))
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }
}
