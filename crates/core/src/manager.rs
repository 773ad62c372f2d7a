// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lease-based mutual exclusion over a shared key-value store
//!
//! Each locked resource maps to one key, `<prefix><canonical resource JSON>`,
//! whose value is the encoded [`LockClaim`] of the holder and whose expiry is
//! the lease. The manager keeps no state of its own: any number of managers,
//! in any number of processes, may point at the same store and prefix.
//!
//! Only first acquisition is atomic (create-if-absent). Re-entry, release and
//! hand-off read the current claim and then write, so a holder whose lease
//! expires between the read and the write can have a newer, unrelated claim
//! refreshed, deleted or overwritten. Keep leases short relative to the work
//! they protect.

use crate::claim::LockClaim;
use crate::clock::{Clock, SystemClock};
use crate::config::LockerConfig;
use crate::error::LockError;
use crate::resource::Lockable;
use crate::store::KeyValueStore;
use tracing::{debug, info};

/// Acquires, releases and hands off resource locks
#[derive(Clone, Debug)]
pub struct LockManager<S, C: Clock = SystemClock> {
    pub(crate) store: S,
    pub(crate) config: LockerConfig,
    pub(crate) clock: C,
}

impl<S: KeyValueStore> LockManager<S, SystemClock> {
    pub fn new(store: S, config: LockerConfig) -> Self {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> LockManager<S, C> {
    /// Create a manager whose waiting helper measures time with `clock`
    pub fn with_clock(store: S, config: LockerConfig, clock: C) -> Self {
        Self {
            store,
            config,
            clock,
        }
    }

    pub fn config(&self) -> &LockerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key_prefix(&self) -> &str {
        &self.config.key_prefix
    }

    pub fn default_timeout(&self) -> u64 {
        self.config.default_timeout
    }

    pub fn max_timeout(&self) -> u64 {
        self.config.max_timeout
    }

    /// Resolve a requested lease, falling back to the default, and check it
    /// lies in `[1, max_timeout]`
    pub fn guard_timeout(&self, requested: Option<u64>) -> Result<u64, LockError> {
        let lease = requested.unwrap_or(self.config.default_timeout);
        if lease == 0 || lease > self.config.max_timeout {
            return Err(LockError::InvalidTimeout {
                requested: lease,
                max: self.config.max_timeout,
            });
        }
        Ok(lease)
    }

    /// Store key for `resource`
    pub fn resource_key(&self, resource: &impl Lockable) -> Result<String, LockError> {
        let identity = resource.resource_identity().canonical()?;
        Ok(format!("{}{}", self.config.key_prefix, identity))
    }

    /// Acquire `resource` for `claim`, or refresh the lease if a compatible
    /// claim already holds it
    ///
    /// Returns `Ok(false)` when an incompatible claim holds the lock; that
    /// claim is left untouched.
    pub async fn lock(&self, resource: &impl Lockable, claim: &LockClaim) -> Result<bool, LockError> {
        let lease = self.guard_timeout(claim.lease)?;
        let key = self.resource_key(resource)?;
        let value = claim.encode()?;

        if self.store.set_if_absent(&key, &value, lease).await? {
            info!(%key, holder = %claim.holder, lease, "lock acquired");
            return Ok(true);
        }

        match self.current_claim(&key).await? {
            Some(actual) if actual.is_compatible(claim) => {
                if self.store.expire(&key, lease).await? {
                    debug!(%key, lease, "lock re-entered, lease refreshed");
                    return Ok(true);
                }
                // Lease ran out between the read and the refresh
                let acquired = self.store.set_if_absent(&key, &value, lease).await?;
                debug!(%key, acquired, "lock expired during re-entry");
                Ok(acquired)
            }
            Some(actual) => {
                debug!(%key, holder = %actual.holder, "lock held by incompatible claim");
                Ok(false)
            }
            None => {
                debug!(%key, "lock vanished after failed create");
                Ok(false)
            }
        }
    }

    /// Release `resource` if `claim` is compatible with its holder
    ///
    /// An unlocked resource counts as released.
    pub async fn unlock(&self, resource: &impl Lockable, claim: &LockClaim) -> Result<bool, LockError> {
        let key = self.resource_key(resource)?;

        match self.current_claim(&key).await? {
            None => {
                debug!(%key, "already unlocked");
                Ok(true)
            }
            Some(actual) if actual.is_compatible(claim) => {
                self.store.delete(&key).await?;
                info!(%key, holder = %claim.holder, "lock released");
                Ok(true)
            }
            Some(actual) => {
                debug!(%key, holder = %actual.holder, "release rejected");
                Ok(false)
            }
        }
    }

    /// Replace the claim held by `current` with `next`, resetting the lease to
    /// `next`'s
    ///
    /// With no claim in place this is a plain [`lock`](Self::lock) for `next`.
    pub async fn pass_lock(
        &self,
        resource: &impl Lockable,
        current: &LockClaim,
        next: &LockClaim,
    ) -> Result<bool, LockError> {
        let lease = self.guard_timeout(next.lease)?;
        let key = self.resource_key(resource)?;

        match self.current_claim(&key).await? {
            None => {
                debug!(%key, "nothing to hand off, acquiring");
                self.lock(resource, next).await
            }
            Some(actual) if actual.is_compatible(current) => {
                self.store.set(&key, &next.encode()?, lease).await?;
                info!(%key, from = %current.holder, to = %next.holder, lease, "lock passed");
                Ok(true)
            }
            Some(actual) => {
                debug!(%key, holder = %actual.holder, "hand-off rejected");
                Ok(false)
            }
        }
    }

    /// Whether `resource` is held by a claim incompatible with `claim`
    pub async fn is_locked_for(&self, resource: &impl Lockable, claim: &LockClaim) -> Result<bool, LockError> {
        let key = self.resource_key(resource)?;
        Ok(self
            .current_claim(&key)
            .await?
            .is_some_and(|actual| !actual.is_compatible(claim)))
    }

    /// The claim currently holding `resource`, with its live remaining lease
    pub async fn get_lock(&self, resource: &impl Lockable) -> Result<Option<LockClaim>, LockError> {
        let key = self.resource_key(resource)?;
        let Some(value) = self.store.get(&key).await? else {
            return Ok(None);
        };
        let remaining = self.store.ttl(&key).await?;
        Ok(Some(LockClaim::decode(&value, remaining)?))
    }

    async fn current_claim(&self, key: &str) -> Result<Option<LockClaim>, LockError> {
        match self.store.get(key).await? {
            Some(value) => Ok(Some(LockClaim::decode(&value, None)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
