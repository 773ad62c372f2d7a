// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory store with lease expiry

use super::{KeyValueStore, StoreError};
use crate::clock::{Clock, SystemClock};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Recorded store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    SetIfAbsent { key: String, ttl_secs: u64 },
    Get { key: String },
    Set { key: String, ttl_secs: u64 },
    Delete { key: String },
    Expire { key: String, ttl_secs: u64 },
    Ttl { key: String },
}

impl StoreCall {
    /// Whether this call can change stored state
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            StoreCall::SetIfAbsent { .. }
                | StoreCall::Set { .. }
                | StoreCall::Delete { .. }
                | StoreCall::Expire { .. }
        )
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    written_at: Instant,
    lease: Duration,
}

impl Entry {
    fn new(value: &str, written_at: Instant, ttl_secs: u64) -> Self {
        Self {
            value: value.to_string(),
            written_at,
            lease: Duration::from_secs(ttl_secs),
        }
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.lease
            .saturating_sub(now.saturating_duration_since(self.written_at))
    }
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    calls: Vec<StoreCall>,
    unavailable: bool,
}

/// Process-local [`KeyValueStore`]
///
/// Clones share state. Expired keys are evicted lazily whenever they are
/// touched, so a lease elapsing on the clock is observed exactly like a store
/// evicting the key on its own. Every call is recorded for inspection.
#[derive(Clone, Debug)]
pub struct MemoryStore<C: Clock = SystemClock> {
    inner: Arc<Mutex<Inner>>,
    clock: C,
}

impl MemoryStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MemoryStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MemoryStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            clock,
        }
    }

    /// All calls made so far, oldest first
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock_inner().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock_inner().calls.clear();
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`]
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock_inner().unavailable = unavailable;
    }

    /// Live keys starting with `prefix`, sorted
    pub fn keys(&self, prefix: &str) -> Vec<String> {
        let now = self.clock.now();
        let inner = self.lock_inner();
        let mut keys: Vec<String> = inner
            .entries
            .iter()
            .filter(|(key, entry)| key.starts_with(prefix) && !entry.remaining(now).is_zero())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    fn lock_inner(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record `call`, fail if unavailable, and evict `key` if its lease ran out
    fn begin(&self, call: StoreCall, key: &str) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        let now = self.clock.now();
        let mut inner = self.lock_inner();
        inner.calls.push(call);
        if inner.unavailable {
            return Err(StoreError::Unavailable("memory store marked unavailable".into()));
        }
        if inner
            .entries
            .get(key)
            .is_some_and(|entry| entry.remaining(now).is_zero())
        {
            inner.entries.remove(key);
        }
        Ok(inner)
    }
}

#[async_trait]
impl<C: Clock> KeyValueStore for MemoryStore<C> {
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl_secs: u64,
    ) -> Result<bool, StoreError> {
        let now = self.clock.now();
        let call = StoreCall::SetIfAbsent {
            key: key.to_string(),
            ttl_secs,
        };
        let mut inner = self.begin(call, key)?;
        if inner.entries.contains_key(key) {
            return Ok(false);
        }
        inner
            .entries
            .insert(key.to_string(), Entry::new(value, now, ttl_secs));
        Ok(true)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let inner = self.begin(StoreCall::Get { key: key.to_string() }, key)?;
        Ok(inner.entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), StoreError> {
        let now = self.clock.now();
        let call = StoreCall::Set {
            key: key.to_string(),
            ttl_secs,
        };
        let mut inner = self.begin(call, key)?;
        inner
            .entries
            .insert(key.to_string(), Entry::new(value, now, ttl_secs));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut inner = self.begin(StoreCall::Delete { key: key.to_string() }, key)?;
        inner.entries.remove(key);
        Ok(())
    }

    async fn expire(&self, key: &str, ttl_secs: u64) -> Result<bool, StoreError> {
        let now = self.clock.now();
        let call = StoreCall::Expire {
            key: key.to_string(),
            ttl_secs,
        };
        let mut inner = self.begin(call, key)?;
        match inner.entries.get_mut(key) {
            Some(entry) => {
                entry.written_at = now;
                entry.lease = Duration::from_secs(ttl_secs);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, StoreError> {
        let now = self.clock.now();
        let inner = self.begin(StoreCall::Ttl { key: key.to_string() }, key)?;
        // Round to the nearest second, as Redis does for TTL
        Ok(inner.entries.get(key).map(|entry| {
            let remaining = entry.remaining(now);
            ((remaining.as_millis() + 500) / 1000) as u64
        }))
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
