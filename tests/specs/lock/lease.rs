//! Lease validation specs
//!
//! An out-of-range lease is an error, reported without contacting the store.

use crate::prelude::*;

#[test]
fn lock_with_zero_lease_is_an_error() {
    let temp = Project::empty();

    temp.locker()
        .args(&["lock", "document:1", "--holder", "user:1", "--lease", "0"])
        .exits(2)
        .stderr_has("lock timeout should be between 1 and 60 seconds")
        .stderr_lacks("store unavailable")
        .stdout_is_empty();
}

#[test]
fn lock_with_lease_above_max_is_an_error() {
    let temp = Project::empty();

    temp.locker()
        .args(&["lock", "document:1", "--holder", "user:1", "--lease", "61"])
        .exits(2)
        .stderr_has("got 61");
}

#[test]
fn pass_checks_next_lease_first() {
    let temp = Project::empty();

    temp.locker()
        .args(&[
            "pass", "document:1", "--from", "user:1", "--to", "user:2", "--lease", "0",
        ])
        .exits(2)
        .stderr_has("lock timeout should be between 1 and 60 seconds")
        .stderr_lacks("store unavailable");
}

#[test]
fn wait_checks_lease_before_polling() {
    let temp = Project::empty();

    temp.locker()
        .args(&[
            "wait", "document:1", "--holder", "user:1", "--lease", "100", "--timeout", "1m",
        ])
        .exits(2)
        .stderr_has("lock timeout should be between 1 and 60 seconds");
}

#[test]
fn configured_max_raises_the_bound() {
    let temp = Project::empty();
    temp.file("locker.toml", "max_timeout = 120\n");

    temp.locker()
        .args(&[
            "--config", "locker.toml", "lock", "document:1", "--holder", "user:1", "--lease", "90",
        ])
        .exits(2)
        .stderr_lacks("lock timeout should be")
        .stderr_has("store unavailable");
}
