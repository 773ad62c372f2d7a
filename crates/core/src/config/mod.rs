// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration modules

mod locker;

pub use locker::{
    ConfigError, LockerConfig, DEFAULT_KEY_PREFIX, DEFAULT_MAX_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
