//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_every_subcommand() {
    let temp = Project::empty();

    let out = temp.locker().args(&["--help"]).passes();
    let out = out.stdout_has("lock").stdout_has("unlock").stdout_has("pass");
    out.stdout_has("status").stdout_has("wait");
}

#[test]
fn help_documents_store_url_env() {
    let temp = Project::empty();

    temp.locker()
        .args(&["--help"])
        .passes()
        .stdout_has("LOCKER_REDIS_URL");
}

#[test]
fn wait_help_shows_timeout_default() {
    let temp = Project::empty();

    temp.locker()
        .args(&["wait", "--help"])
        .passes()
        .stdout_has("--timeout")
        .stdout_has("10s");
}

#[test]
fn version_flag_prints_name() {
    let temp = Project::empty();

    temp.locker()
        .args(&["--version"])
        .passes()
        .stdout_has("locker");
}
