//! Config file specs

use crate::prelude::*;

#[test]
fn missing_config_file_is_an_error() {
    let temp = Project::empty();

    temp.locker()
        .args(&["--config", "absent.toml", "status", "document:1"])
        .exits(2)
        .stderr_has("failed to read config");
}

#[test]
fn unparseable_config_is_an_error() {
    let temp = Project::empty();
    temp.file("locker.toml", "max_timeout = \"lots\"\n");

    temp.locker()
        .args(&["--config", "locker.toml", "status", "document:1"])
        .exits(2)
        .stderr_has("failed to parse config");
}

#[test]
fn default_above_max_is_rejected() {
    let temp = Project::empty();
    temp.file("locker.toml", "default_timeout = 30\nmax_timeout = 10\n");

    temp.locker()
        .args(&["--config", "locker.toml", "status", "document:1"])
        .exits(2)
        .stderr_has("default_timeout must be between 1 and 10 seconds");
}

#[test]
fn wait_settings_accept_human_durations() {
    let temp = Project::empty();
    temp.file(
        "locker.toml",
        "key_prefix = \"Jobs:\"\n\n[wait]\ninitial_interval = \"20ms\"\nmax_interval = \"2s\"\n",
    );

    // Config is accepted, so the failure comes from the store
    temp.locker()
        .args(&["--config", "locker.toml", "status", "document:1"])
        .exits(2)
        .stderr_has("store unavailable");
}
