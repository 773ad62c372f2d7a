// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key-value store capability consumed by the lock manager
//!
//! The manager needs exactly six primitives from its backing store. Anything
//! offering atomic create-if-absent with expiry can implement [`KeyValueStore`].

mod memory;

pub use memory::{MemoryStore, StoreCall};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from store round-trips
///
/// The lock manager never retries these; they surface to the caller as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("unexpected store reply: {0}")]
    Protocol(String),
}

/// Key-value store with per-key expiry in whole seconds
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Create `key` with `value` and a lease of `ttl_secs`, only if it is absent.
    /// Returns whether the key was created.
    async fn set_if_absent(&self, key: &str, value: &str, ttl_secs: u64)
        -> Result<bool, StoreError>;

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite `key` unconditionally, resetting its lease
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Reset the lease of an existing key. Returns false if the key is absent.
    async fn expire(&self, key: &str, ttl_secs: u64) -> Result<bool, StoreError>;

    /// Remaining lease in seconds; `None` if the key is absent or never expires
    async fn ttl(&self, key: &str) -> Result<Option<u64>, StoreError>;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl_secs: u64,
    ) -> Result<bool, StoreError> {
        (**self).set_if_absent(key, value, ttl_secs).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), StoreError> {
        (**self).set(key, value, ttl_secs).await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key).await
    }

    async fn expire(&self, key: &str, ttl_secs: u64) -> Result<bool, StoreError> {
        (**self).expire(key, ttl_secs).await
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, StoreError> {
        (**self).ttl(key).await
    }
}
