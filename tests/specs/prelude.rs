//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Nothing listens here, so any store access fails fast
pub const UNREACHABLE_REDIS: &str = "redis://127.0.0.1:1/";

/// Scratch directory for config files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// A `locker` invocation pointed at an unreachable store
    pub fn locker(&self) -> CliBuilder {
        let mut cmd = Command::cargo_bin("locker").unwrap();
        cmd.current_dir(self.dir.path())
            .env("LOCKER_REDIS_URL", UNREACHABLE_REDIS)
            .env_remove("RUST_LOG");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Expect exit status 0
    pub fn passes(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().success())
    }

    /// Expect a non-zero exit status
    pub fn fails(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().failure())
    }

    /// Expect a specific exit status
    pub fn exits(mut self, code: i32) -> RunAssert {
        RunAssert(self.cmd.assert().code(code))
    }
}

pub struct RunAssert(Assert);

impl RunAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        Self(self.0.stdout(predicate::str::contains(needle)))
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Self(self.0.stderr(predicate::str::contains(needle)))
    }

    pub fn stderr_lacks(self, needle: &str) -> Self {
        Self(self.0.stderr(predicate::str::contains(needle).not()))
    }

    pub fn stdout_is_empty(self) -> Self {
        Self(self.0.stdout(predicate::str::is_empty()))
    }
}
