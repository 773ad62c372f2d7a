// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort waiting for a lock
//!
//! Polls [`LockManager::lock`] with exponential backoff until it succeeds or
//! a deadline passes. Waiters are not queued: whoever polls first after the
//! lock frees up wins, and a waiter can starve.

use crate::claim::LockClaim;
use crate::clock::Clock;
use crate::error::LockError;
use crate::manager::LockManager;
use crate::resource::Lockable;
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Polling schedule for [`LockManager::wait_for_lock`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitConfig {
    /// Delay after the first failed attempt
    #[serde(with = "humantime_serde")]
    pub initial_interval: Duration,
    /// Upper bound for any single delay
    #[serde(with = "humantime_serde")]
    pub max_interval: Duration,
    /// Growth factor applied after each failed attempt
    pub multiplier: f64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(50),
            max_interval: Duration::from_secs(1),
            multiplier: 2.0,
        }
    }
}

impl WaitConfig {
    pub fn with_initial_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }

    pub fn with_max_interval(mut self, interval: Duration) -> Self {
        self.max_interval = interval;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.initial_interval.is_zero() {
            return Err("wait.initial_interval must be positive".into());
        }
        if self.max_interval < self.initial_interval {
            return Err("wait.max_interval must not be below wait.initial_interval".into());
        }
        if !(self.multiplier >= 1.0 && self.multiplier.is_finite()) {
            return Err(format!(
                "wait.multiplier must be a finite number >= 1, got {}",
                self.multiplier
            ));
        }
        Ok(())
    }

    /// Delays between attempts, in order
    pub fn backoff(&self) -> Backoff {
        Backoff {
            next: self.initial_interval,
            max: self.max_interval,
            multiplier: self.multiplier.max(1.0),
        }
    }
}

/// Exponentially growing, capped delay sequence
#[derive(Clone, Debug)]
pub struct Backoff {
    next: Duration,
    max: Duration,
    multiplier: f64,
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let current = self.next.min(self.max);
        self.next = Duration::try_from_secs_f64(current.as_secs_f64() * self.multiplier)
            .map_or(self.max, |grown| grown.min(self.max));
        Some(current)
    }
}

impl<S: KeyValueStore, C: Clock> LockManager<S, C> {
    /// Keep trying to [`lock`](Self::lock) until it succeeds or `timeout`
    /// elapses
    ///
    /// The lease is validated before the first attempt. A last attempt is
    /// made once the deadline is reached. Store errors end the wait
    /// immediately. A `timeout` too large to measure on the clock never
    /// expires.
    pub async fn wait_for_lock(
        &self,
        resource: &impl Lockable,
        claim: &LockClaim,
        timeout: Duration,
    ) -> Result<bool, LockError> {
        self.guard_timeout(claim.lease)?;

        let deadline = self.clock.now().checked_add(timeout);
        let mut delays = self.config.wait.backoff();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            if self.lock(resource, claim).await? {
                debug!(attempts, holder = %claim.holder, "lock acquired after waiting");
                return Ok(true);
            }

            let mut delay = delays.next().unwrap_or(self.config.wait.max_interval);
            if let Some(deadline) = deadline {
                let now = self.clock.now();
                if now >= deadline {
                    debug!(attempts, holder = %claim.holder, "gave up waiting for lock");
                    return Ok(false);
                }
                delay = delay.min(deadline - now);
            }
            self.clock.sleep(delay).await;
        }
    }
}

#[cfg(test)]
#[path = "wait_tests.rs"]
mod tests;
