// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use async_trait::async_trait;
use locker_core::{KeyValueStore, StoreError};
use std::fmt::{Debug, Display};
use std::time::Instant;
use tracing::Instrument;

/// Wrapper that adds tracing to any KeyValueStore
#[derive(Clone, Debug)]
pub struct TracedStore<S> {
    inner: S,
}

impl<S> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

/// Log the outcome of one store call inside the current span
fn record<T: Debug, E: Display>(result: &Result<T, E>, start: Instant) {
    let elapsed_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(reply) => tracing::debug!(elapsed_ms, reply = ?reply, "ok"),
        Err(e) => tracing::error!(elapsed_ms, error = %e, "failed"),
    }
}

#[async_trait]
impl<S: KeyValueStore> KeyValueStore for TracedStore<S> {
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl_secs: u64,
    ) -> Result<bool, StoreError> {
        let span = tracing::debug_span!("store.set_if_absent", key, ttl_secs);
        async {
            let start = Instant::now();
            let result = self.inner.set_if_absent(key, value, ttl_secs).await;
            record(&result, start);
            result
        }
        .instrument(span)
        .await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let span = tracing::debug_span!("store.get", key);
        async {
            let start = Instant::now();
            let result = self.inner.get(key).await;
            record(&result.as_ref().map(Option::is_some), start);
            result
        }
        .instrument(span)
        .await
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), StoreError> {
        let span = tracing::debug_span!("store.set", key, ttl_secs);
        async {
            let start = Instant::now();
            let result = self.inner.set(key, value, ttl_secs).await;
            record(&result, start);
            result
        }
        .instrument(span)
        .await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let span = tracing::debug_span!("store.delete", key);
        async {
            let start = Instant::now();
            let result = self.inner.delete(key).await;
            record(&result, start);
            result
        }
        .instrument(span)
        .await
    }

    async fn expire(&self, key: &str, ttl_secs: u64) -> Result<bool, StoreError> {
        let span = tracing::debug_span!("store.expire", key, ttl_secs);
        async {
            let start = Instant::now();
            let result = self.inner.expire(key, ttl_secs).await;
            record(&result, start);
            result
        }
        .instrument(span)
        .await
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, StoreError> {
        let span = tracing::debug_span!("store.ttl", key);
        async {
            let start = Instant::now();
            let result = self.inner.ttl(key).await;
            record(&result, start);
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
