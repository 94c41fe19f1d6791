// ── State reconciliation ──
//
// A cancellable periodic task that re-fetches power state for every
// device with a subscribed entity and pushes an update only when the
// fetched state differs from the host's cached value. Every failure is
// non-fatal: log and let the next tick run.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::host::HostHandle;
use crate::model::{Attribute, Outcome, OutcomeStatus};
use crate::registry::DeviceRegistry;

/// Run the reconciliation loop until cancelled.
///
/// The first interval tick fires immediately and is consumed, so a
/// freshly (re)started loop always waits the full period before its
/// first pass. Resuming from standby never catches up on missed ticks.
pub(crate) async fn reconcile_task(
    registry: Arc<DeviceRegistry>,
    host: Arc<dyn HostHandle>,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(period);
    interval.tick().await; // consume the immediate first tick

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => reconcile_once(&registry, host.as_ref()).await,
        }
    }
    debug!("reconciliation loop stopped");
}

/// One reconciliation pass over all subscribed devices.
pub(crate) async fn reconcile_once(registry: &DeviceRegistry, host: &dyn HostHandle) {
    for entry in registry.subscribed_entries() {
        let entity_id = &entry.device.id;

        let Outcome::Remote(outcome) = entry.executor.power_state().await else {
            continue;
        };

        match (outcome.status, outcome.state) {
            (OutcomeStatus::Ok, Some(state)) => {
                if host.cached_remote_state(entity_id) != Some(state) {
                    debug!(entity = %entity_id, state = %state, "reconciled state drift");
                    host.push_attribute(entity_id, Attribute::RemoteState, state.as_str());
                }
            }
            _ => {
                warn!(
                    entity = %entity_id,
                    error = outcome.error.as_deref().unwrap_or("no state reported"),
                    "power state refresh failed"
                );
            }
        }
    }
}
