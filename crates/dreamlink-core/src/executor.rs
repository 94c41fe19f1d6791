// ── Command executor ──
//
// Converts wire-level results from `DreamboxClient` into typed
// outcomes. This is the only place transport errors are absorbed:
// nothing below the dispatcher ever sees a raw `dreamlink_api::Error`.

use dreamlink_api::DreamboxClient;
use secrecy::SecretString;
use url::Url;

use crate::model::{Outcome, OutcomeStatus, RemoteOutcome, RemoteState, SwitchOutcome, SwitchState};

/// Requested mode for the downmix switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DownmixMode {
    On,
    Off,
    Toggle,
}

/// Outcome-producing wrapper around one device's client.
pub(crate) struct CommandExecutor {
    entity_id: String,
    client: DreamboxClient,
}

impl CommandExecutor {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: Url,
        entity_id: String,
        username: Option<String>,
        password: Option<SecretString>,
    ) -> Self {
        let client = DreamboxClient::with_client(http, base_url, username, password);
        Self { entity_id, client }
    }

    pub(crate) fn entity_id(&self) -> &str {
        &self.entity_id
    }

    /// Press a remote key. Ok outcomes carry no inferred state.
    pub(crate) async fn send_key(&self, code: u32, long_press: bool) -> Outcome {
        match self.client.send_key(code, long_press).await {
            Ok(()) => self.remote(OutcomeStatus::Ok, None, None),
            Err(e) => self.remote(OutcomeStatus::ServerError, None, Some(e.to_string())),
        }
    }

    /// Set power. State is inferred from the requested command, never
    /// from the response body (the box reports stale standby values on
    /// state changes).
    pub(crate) async fn set_power(&self, on: bool) -> Outcome {
        let requested = if on { RemoteState::On } else { RemoteState::Off };
        match self.client.set_power(on).await {
            Ok(()) => self.remote(OutcomeStatus::Ok, Some(requested), None),
            Err(e) => self.remote(
                OutcomeStatus::ServerError,
                Some(RemoteState::Unknown),
                Some(e.to_string()),
            ),
        }
    }

    /// Query power state. Standby is not an error condition: both
    /// directions report Ok.
    pub(crate) async fn power_state(&self) -> Outcome {
        match self.client.power_state().await {
            Ok(standby) => {
                let state = if standby { RemoteState::Off } else { RemoteState::On };
                self.remote(OutcomeStatus::Ok, Some(state), None)
            }
            Err(e) => self.remote(OutcomeStatus::ServerError, None, Some(e.to_string())),
        }
    }

    /// Query the downmix switch.
    pub(crate) async fn downmix(&self) -> Outcome {
        match self.client.downmix().await {
            Ok(enabled) => self.switch(OutcomeStatus::Ok, Some(switch_state(enabled)), None),
            Err(e) => self.switch(OutcomeStatus::ServerError, None, Some(e.to_string())),
        }
    }

    /// Set the downmix switch.
    ///
    /// Toggle reads the current state first; a read without usable
    /// state short-circuits and returns that read's outcome unchanged,
    /// with no write attempted.
    pub(crate) async fn set_downmix(&self, mode: DownmixMode) -> Outcome {
        let enable = match mode {
            DownmixMode::On => true,
            DownmixMode::Off => false,
            DownmixMode::Toggle => {
                let current = self.downmix().await;
                match current {
                    Outcome::Switch(SwitchOutcome {
                        state: Some(state), ..
                    }) => state.toggled() == SwitchState::On,
                    other => return other,
                }
            }
        };

        match self.client.set_downmix(enable).await {
            Ok(enabled) => self.switch(OutcomeStatus::Ok, Some(switch_state(enabled)), None),
            Err(e) => self.switch(OutcomeStatus::ServerError, None, Some(e.to_string())),
        }
    }

    fn remote(
        &self,
        status: OutcomeStatus,
        state: Option<RemoteState>,
        error: Option<String>,
    ) -> Outcome {
        Outcome::Remote(RemoteOutcome {
            entity_id: self.entity_id.clone(),
            status,
            state,
            error,
        })
    }

    fn switch(
        &self,
        status: OutcomeStatus,
        state: Option<SwitchState>,
        error: Option<String>,
    ) -> Outcome {
        Outcome::Switch(SwitchOutcome {
            entity_id: self.entity_id.clone(),
            status,
            state,
            error,
        })
    }
}

const fn switch_state(enabled: bool) -> SwitchState {
    if enabled {
        SwitchState::On
    } else {
        SwitchState::Off
    }
}
