// ── Domain model ──
//
// States, outcomes, and device registration data. Outcomes come in one
// closed variant per attribute domain (remote state vs switch state)
// so success/failure shapes stay exhaustively checked.

use std::fmt;

use secrecy::SecretString;

// ── Device ──────────────────────────────────────────────────────────

/// A configured Dreambox device.
///
/// Built by the host from its own configuration; the core never
/// persists it. `id` doubles as the entity id on the host side.
#[derive(Debug, Clone)]
pub struct Device {
    pub id: String,
    pub address: String,
    pub name: String,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

// ── States ──────────────────────────────────────────────────────────

/// Power-derived state of the remote entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteState {
    On,
    Off,
    Unknown,
}

impl RemoteState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RemoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the audio-downmix switch entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Outcomes ────────────────────────────────────────────────────────

/// Status classification of one device interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Ok,
    ServerError,
    NotFound,
}

/// Attribute domain reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    RemoteState,
    SwitchState,
}

impl Attribute {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RemoteState => "remote_state",
            Self::SwitchState => "switch_state",
        }
    }
}

/// Result of a remote-key or power interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOutcome {
    pub entity_id: String,
    pub status: OutcomeStatus,
    pub state: Option<RemoteState>,
    pub error: Option<String>,
}

/// Result of a downmix-switch interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub entity_id: String,
    pub status: OutcomeStatus,
    pub state: Option<SwitchState>,
    pub error: Option<String>,
}

/// The structured result of one device interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Remote(RemoteOutcome),
    Switch(SwitchOutcome),
    /// No such device or no resolvable command; nothing was sent.
    NotFound { entity_id: String },
}

impl Outcome {
    pub fn status(&self) -> OutcomeStatus {
        match self {
            Self::Remote(o) => o.status,
            Self::Switch(o) => o.status,
            Self::NotFound { .. } => OutcomeStatus::NotFound,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status() == OutcomeStatus::Ok
    }

    pub fn entity_id(&self) -> &str {
        match self {
            Self::Remote(o) => &o.entity_id,
            Self::Switch(o) => &o.entity_id,
            Self::NotFound { entity_id } => entity_id,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Remote(o) => o.error.as_deref(),
            Self::Switch(o) => o.error.as_deref(),
            Self::NotFound { .. } => None,
        }
    }

    /// The attribute update this outcome carries, if any.
    pub fn attribute_update(&self) -> Option<(Attribute, &'static str)> {
        match self {
            Self::Remote(o) => o.state.map(|s| (Attribute::RemoteState, s.as_str())),
            Self::Switch(o) => o.state.map(|s| (Attribute::SwitchState, s.as_str())),
            Self::NotFound { .. } => None,
        }
    }
}
