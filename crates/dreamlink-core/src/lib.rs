// dreamlink-core: command dispatch and state-synchronization engine
// sitting between a host integration framework and Dreambox devices.

pub mod adapter;
pub mod config;
pub mod error;
pub mod host;
pub mod model;

mod dispatcher;
mod executor;
mod reconciler;
mod registry;

// ── Primary re-exports ──────────────────────────────────────────────
pub use adapter::Adapter;
pub use config::AdapterConfig;
pub use dispatcher::RemoteCommand;
pub use error::CoreError;
pub use host::HostHandle;
pub use model::{
    Attribute, Device, Outcome, OutcomeStatus, RemoteOutcome, RemoteState, SwitchOutcome,
    SwitchState,
};
