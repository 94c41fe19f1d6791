// ── Host interface ──
//
// The integration framework that owns entities sits behind this trait.
// The adapter pushes attribute changes outward and consults the host's
// cached remote state during reconciliation; it never mutates host
// state any other way.

use crate::model::{Attribute, RemoteState};

/// Outbound interface to the host integration framework.
///
/// Implementations must tolerate interleaved calls from a dispatch and
/// a reconciliation tick; last write wins.
pub trait HostHandle: Send + Sync {
    /// Signal an attribute change for an entity.
    fn push_attribute(&self, entity_id: &str, attribute: Attribute, value: &str);

    /// The host's currently cached remote state for an entity, if any.
    fn cached_remote_state(&self, entity_id: &str) -> Option<RemoteState>;
}
