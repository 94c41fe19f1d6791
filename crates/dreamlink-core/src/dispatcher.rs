// ── Command dispatch ──
//
// Resolves logical command names to device actions, applies
// repeat/sequence and fail-fast rules, and pushes inferred state to
// the host. Within one invocation everything runs strictly in order;
// the only suspension points are device calls and sequence delays.

use std::time::Duration;

use dreamlink_api::keymap;
use tracing::{error, warn};

use crate::executor::{CommandExecutor, DownmixMode};
use crate::host::HostHandle;
use crate::model::Outcome;

/// Top-level remote commands accepted from the host.
#[derive(Debug, Clone)]
pub enum RemoteCommand {
    On,
    Off,
    /// Presses the `POWER` key rather than calling the power-state
    /// endpoint. Intentional asymmetry with `On`/`Off`, preserved from
    /// the device integration's behavior.
    Toggle,
    SendCmd {
        command: String,
        repeat: Option<u32>,
    },
    SendCmdSequence {
        sequence: Vec<String>,
        delay_ms: u64,
    },
}

/// What a resolved command name means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Key { code: u32, long_press: bool },
    Downmix(DownmixMode),
}

/// Resolve a command name to an action.
///
/// A `_LONG` suffix is stripped first and recorded as the long-press
/// flag; resolution then runs on the stripped name: downmix set,
/// primary table, purely-numeric code, extended table. Downmix tokens
/// ignore the long-press flag. `None` means no operation: the caller
/// reports not-found and no request is made.
pub(crate) fn resolve(name: &str) -> Option<KeyAction> {
    let (bare, long_press) = match name.strip_suffix("_LONG") {
        Some(prefix) => (prefix, true),
        None => (name, false),
    };

    match bare {
        "DOWNMIX_ON" => return Some(KeyAction::Downmix(DownmixMode::On)),
        "DOWNMIX_OFF" => return Some(KeyAction::Downmix(DownmixMode::Off)),
        "DOWNMIX_TOGGLE" => return Some(KeyAction::Downmix(DownmixMode::Toggle)),
        _ => {}
    }

    if let Some(code) = keymap::lookup(bare) {
        return Some(KeyAction::Key { code, long_press });
    }

    if !bare.is_empty() && bare.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(code) = bare.parse::<u32>() {
            return Some(KeyAction::Key { code, long_press });
        }
    }

    keymap::lookup_extended(bare).map(|code| KeyAction::Key { code, long_press })
}

/// Execute one top-level command against a device.
pub(crate) async fn dispatch(
    executor: &CommandExecutor,
    host: &dyn HostHandle,
    command: RemoteCommand,
) -> Outcome {
    match command {
        RemoteCommand::On => {
            let outcome = executor.set_power(true).await;
            finish(host, outcome)
        }
        RemoteCommand::Off => {
            let outcome = executor.set_power(false).await;
            finish(host, outcome)
        }
        RemoteCommand::Toggle => send_named(executor, host, "POWER").await,
        RemoteCommand::SendCmd { command, repeat } => {
            let repeat = repeat.filter(|r| *r > 0).unwrap_or(1);
            let mut outcome = send_named(executor, host, &command).await;
            for _ in 1..repeat {
                if !outcome.is_ok() {
                    return outcome;
                }
                outcome = send_named(executor, host, &command).await;
            }
            outcome
        }
        RemoteCommand::SendCmdSequence { sequence, delay_ms } => {
            let delay = Duration::from_millis(delay_ms);
            let mut outcome = Outcome::NotFound {
                entity_id: executor.entity_id().to_owned(),
            };
            for (index, name) in sequence.iter().enumerate() {
                outcome = send_named(executor, host, name).await;
                if !outcome.is_ok() {
                    return outcome;
                }
                if index + 1 < sequence.len() && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
            outcome
        }
    }
}

/// Resolve and execute one named command, pushing any inferred state.
async fn send_named(executor: &CommandExecutor, host: &dyn HostHandle, name: &str) -> Outcome {
    let outcome = match resolve(name) {
        Some(KeyAction::Key { code, long_press }) => executor.send_key(code, long_press).await,
        Some(KeyAction::Downmix(mode)) => executor.set_downmix(mode).await,
        None => {
            warn!(command = name, "unknown remote command");
            Outcome::NotFound {
                entity_id: executor.entity_id().to_owned(),
            }
        }
    };
    finish(host, outcome)
}

/// Push the outcome's attribute update (if any) and log its error.
fn finish(host: &dyn HostHandle, outcome: Outcome) -> Outcome {
    if let Some((attribute, value)) = outcome.attribute_update() {
        host.push_attribute(outcome.entity_id(), attribute, value);
    }
    if let Some(detail) = outcome.error() {
        error!(entity = outcome.entity_id(), "{detail}");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_primary_names() {
        assert_eq!(
            resolve("VOLUME_UP"),
            Some(KeyAction::Key {
                code: 115,
                long_press: false
            })
        );
        assert_eq!(
            resolve("OK"),
            Some(KeyAction::Key {
                code: 352,
                long_press: false
            })
        );
    }

    #[test]
    fn long_suffix_sets_flag_and_keeps_code() {
        for name in keymap::primary_names() {
            let plain = resolve(name);
            let long = resolve(&format!("{name}_LONG"));
            let Some(KeyAction::Key { code, long_press: false }) = plain else {
                panic!("{name} did not resolve to a plain key");
            };
            assert_eq!(
                long,
                Some(KeyAction::Key {
                    code,
                    long_press: true
                })
            );
        }
    }

    #[test]
    fn resolves_downmix_set_first() {
        assert_eq!(resolve("DOWNMIX_ON"), Some(KeyAction::Downmix(DownmixMode::On)));
        assert_eq!(resolve("DOWNMIX_OFF"), Some(KeyAction::Downmix(DownmixMode::Off)));
        assert_eq!(
            resolve("DOWNMIX_TOGGLE"),
            Some(KeyAction::Downmix(DownmixMode::Toggle))
        );
    }

    #[test]
    fn downmix_tokens_resolve_after_long_strip() {
        assert_eq!(
            resolve("DOWNMIX_ON_LONG"),
            Some(KeyAction::Downmix(DownmixMode::On))
        );
        assert_eq!(
            resolve("DOWNMIX_TOGGLE_LONG"),
            Some(KeyAction::Downmix(DownmixMode::Toggle))
        );
    }

    #[test]
    fn resolves_raw_numeric_codes() {
        assert_eq!(
            resolve("362"),
            Some(KeyAction::Key {
                code: 362,
                long_press: false
            })
        );
        assert_eq!(
            resolve("362_LONG"),
            Some(KeyAction::Key {
                code: 362,
                long_press: true
            })
        );
        assert_eq!(resolve("36x2"), None);
        assert_eq!(resolve("-3"), None);
    }

    #[test]
    fn falls_back_to_extended_table() {
        assert_eq!(
            resolve("KEY_EPG"),
            Some(KeyAction::Key {
                code: 365,
                long_press: false
            })
        );
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(resolve("FOO"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("_LONG"), None);
    }
}
