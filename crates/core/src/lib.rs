// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! locker-core: lease-based distributed locks over a key-value store
//!
//! This crate provides:
//! - `LockManager`: acquire, re-enter, release, hand off and inspect locks
//! - `LockClaim` and the compatibility relation between claims
//! - The `KeyValueStore` capability plus an in-memory implementation
//! - A best-effort waiting helper with exponential backoff
//! - TOML configuration

pub mod clock;
pub mod config;
pub mod resource;
pub mod store;

pub mod claim;
pub mod error;
pub mod manager;
pub mod wait;

// Re-exports
pub use claim::LockClaim;
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, LockerConfig};
pub use error::{ContentionExt, LockError};
pub use manager::LockManager;
pub use resource::{Lockable, ResourceIdentity, ResourceParseError};
pub use store::{KeyValueStore, MemoryStore, StoreCall, StoreError};
pub use wait::{Backoff, WaitConfig};
