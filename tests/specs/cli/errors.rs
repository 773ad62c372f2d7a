//! Argument error specs
//!
//! Malformed input is rejected before any store access.

use crate::prelude::*;

#[test]
fn unknown_subcommand_fails() {
    let temp = Project::empty();

    temp.locker().args(&["grab"]).fails();
}

#[test]
fn resource_without_separator_is_rejected() {
    let temp = Project::empty();

    temp.locker()
        .args(&["lock", "document", "--holder", "user:1"])
        .exits(2)
        .stderr_has("document");
}

#[test]
fn holder_with_empty_id_is_rejected() {
    let temp = Project::empty();

    temp.locker()
        .args(&["lock", "document:1", "--holder", "user:"])
        .exits(2)
        .stderr_lacks("store unavailable");
}

#[test]
fn lock_requires_holder() {
    let temp = Project::empty();

    temp.locker()
        .args(&["lock", "document:1"])
        .exits(2)
        .stderr_has("--holder");
}

#[test]
fn pass_requires_both_claims() {
    let temp = Project::empty();

    temp.locker()
        .args(&["pass", "document:1", "--from", "user:1"])
        .exits(2)
        .stderr_has("--to");
}

#[test]
fn status_identity_requires_for() {
    let temp = Project::empty();

    temp.locker()
        .args(&["status", "document:1", "--identity", "tab-1"])
        .exits(2);
}

#[test]
fn malformed_wait_timeout_is_rejected() {
    let temp = Project::empty();

    temp.locker()
        .args(&["wait", "document:1", "--holder", "user:1", "--timeout", "soon"])
        .exits(2)
        .stderr_has("soon");
}
