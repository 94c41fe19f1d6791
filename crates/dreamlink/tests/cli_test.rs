//! Offline CLI behavior: argument parsing, key listing, and config
//! resolution failures. Device-bound behavior is covered by the core
//! integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn dreamlink() -> Command {
    let mut cmd = Command::cargo_bin("dreamlink").unwrap();
    // Isolate from the developer's real config and environment.
    let tmp = std::env::temp_dir();
    cmd.env("HOME", &tmp)
        .env("XDG_CONFIG_HOME", &tmp)
        .env_remove("DREAMLINK_HOST")
        .env_remove("DREAMLINK_USERNAME")
        .env_remove("DREAMLINK_PASSWORD");
    cmd
}

#[test]
fn help_lists_subcommands() {
    dreamlink()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("power")
                .and(predicate::str::contains("downmix"))
                .and(predicate::str::contains("watch")),
        );
}

#[test]
fn keys_lists_primary_names() {
    dreamlink()
        .arg("keys")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("VOLUME_UP")
                .and(predicate::str::contains("POWER"))
                .and(predicate::str::contains("KEY_ESC").not()),
        );
}

#[test]
fn keys_extended_includes_low_level_names() {
    dreamlink()
        .args(["keys", "--extended"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KEY_ESC"));
}

#[test]
fn missing_receiver_is_a_usage_error() {
    dreamlink()
        .args(["power", "status"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No receiver configured"));
}

#[test]
fn unknown_profile_is_reported() {
    dreamlink()
        .args(["--device", "bedroom", "info"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("bedroom"));
}

#[test]
fn key_requires_a_name() {
    dreamlink().arg("key").assert().failure().code(2);
}

#[test]
fn zero_watch_interval_is_rejected() {
    // A zero interval must be refused up front; it would otherwise
    // take down the reconciliation loop.
    dreamlink()
        .args(["--host", "127.0.0.1:9", "watch", "--interval", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("interval"));
}

#[test]
fn zero_profile_poll_interval_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let config_dir = tmp.path().join("dreamlink");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "default_device = \"living\"\n\
         \n\
         [devices.living]\n\
         host = \"127.0.0.1:9\"\n\
         poll_interval = 0\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("dreamlink").unwrap();
    cmd.env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path())
        .env_remove("DREAMLINK_HOST")
        .env_remove("DREAMLINK_USERNAME")
        .env_remove("DREAMLINK_PASSWORD");

    cmd.args(["power", "status"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("poll_interval"));
}
