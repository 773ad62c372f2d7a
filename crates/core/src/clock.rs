// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for lease arithmetic and polling delays
//!
//! Leases in the in-memory store and the deadline of the waiting helper are
//! both measured against a [`Clock`], so tests can drive expiry without
//! sleeping for real.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A source of time that can also wait
#[async_trait]
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Instant;

    /// Suspend the caller for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Wall clock backed by tokio timers
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Manually driven clock for tests
///
/// Clones share the same instant. `sleep` advances the shared instant instead
/// of blocking, then yields so other tasks observe the new time.
#[derive(Clone, Debug)]
pub struct FakeClock {
    current: Arc<Mutex<Instant>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Move time forward; a step past the representable range is ignored
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(next) = current.checked_add(duration) {
            *current = next;
        }
    }

    /// Move time forward by whole seconds
    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration);
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
