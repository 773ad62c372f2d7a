// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lock manager configuration
//!
//! Loaded from TOML. Every field is optional:
//!
//! ```toml
//! key_prefix = "Locker:"
//! default_timeout = 5
//! max_timeout = 60
//!
//! [wait]
//! initial_interval = "50ms"
//! max_interval = "1s"
//! multiplier = 2.0
//! ```

use crate::wait::WaitConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_KEY_PREFIX: &str = "Locker:";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_TIMEOUT_SECS: u64 = 60;

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings shared by every manager pointed at the same key prefix
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockerConfig {
    /// Namespace prepended to every lock key
    pub key_prefix: String,
    /// Lease used when a claim does not request one, in seconds
    pub default_timeout: u64,
    /// Largest lease a claim may request, in seconds
    pub max_timeout: u64,
    pub wait: WaitConfig,
}

impl Default for LockerConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            default_timeout: DEFAULT_TIMEOUT_SECS,
            max_timeout: DEFAULT_MAX_TIMEOUT_SECS,
            wait: WaitConfig::default(),
        }
    }
}

impl LockerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    pub fn with_default_timeout(mut self, secs: u64) -> Self {
        self.default_timeout = secs;
        self
    }

    pub fn with_max_timeout(mut self, secs: u64) -> Self {
        self.max_timeout = secs;
        self
    }

    pub fn with_wait(mut self, wait: WaitConfig) -> Self {
        self.wait = wait;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LockerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_timeout == 0 {
            return Err(ConfigError::Invalid("max_timeout must be at least 1".into()));
        }
        if self.default_timeout == 0 || self.default_timeout > self.max_timeout {
            return Err(ConfigError::Invalid(format!(
                "default_timeout must be between 1 and {} seconds, got {}",
                self.max_timeout, self.default_timeout
            )));
        }
        self.wait.validate().map_err(ConfigError::Invalid)
    }
}

#[cfg(test)]
#[path = "locker_tests.rs"]
mod tests;
