//! Store failure specs

use crate::prelude::*;

#[test]
fn lock_against_unreachable_store_is_an_error() {
    let temp = Project::empty();

    temp.locker()
        .args(&["lock", "document:1", "--holder", "user:1"])
        .exits(2)
        .stderr_has("store unavailable");
}

#[test]
fn status_against_unreachable_store_is_an_error() {
    let temp = Project::empty();

    temp.locker()
        .args(&["status", "document:1"])
        .exits(2)
        .stderr_has("error:");
}

#[test]
fn redis_url_flag_overrides_env() {
    let temp = Project::empty();

    temp.locker()
        .env("LOCKER_REDIS_URL", "redis://127.0.0.1:6379/")
        .args(&["--redis-url", UNREACHABLE_REDIS, "unlock", "document:1", "--holder", "user:1"])
        .exits(2)
        .stderr_has("store unavailable");
}

#[test]
fn malformed_redis_url_is_an_error() {
    let temp = Project::empty();

    temp.locker()
        .args(&["--redis-url", "not a url", "lock", "document:1", "--holder", "user:1"])
        .exits(2)
        .stderr_has("invalid redis url");
}

#[test]
fn wait_with_enormous_timeout_reaches_the_store() {
    let temp = Project::empty();

    temp.locker()
        .args(&[
            "wait", "document:1", "--holder", "user:1", "--timeout", "500000000000years",
        ])
        .exits(2)
        .stderr_has("store unavailable");
}
