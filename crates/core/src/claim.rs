// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lock claims and the compatibility relation

use crate::resource::{Lockable, ResourceIdentity};
use serde::{Deserialize, Serialize};

/// Who holds (or wants) a lock, under which sub-identity, for how long
///
/// `lease` is the requested lease in seconds when passed to the manager, and
/// the live remaining lease when returned by [`get_lock`]. It is never part of
/// the stored value.
///
/// [`get_lock`]: crate::LockManager::get_lock
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockClaim {
    pub holder: ResourceIdentity,
    pub identity: Option<String>,
    pub lease: Option<u64>,
}

/// Wire form of a claim. Field order is the canonical order.
#[derive(Debug, Serialize, Deserialize)]
struct StoredClaim {
    locker: ResourceIdentity,
    identity: Option<String>,
}

impl LockClaim {
    pub fn new(holder: &impl Lockable) -> Self {
        Self {
            holder: holder.resource_identity(),
            identity: None,
            lease: None,
        }
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    pub fn with_lease(mut self, secs: u64) -> Self {
        self.lease = Some(secs);
        self
    }

    /// Same holder and same sub-identity (both absent counts as equal)
    pub fn is_compatible(&self, other: &LockClaim) -> bool {
        self.holder == other.holder && self.identity == other.identity
    }

    /// Serialize to the stored value
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&StoredClaim {
            locker: self.holder.clone(),
            identity: self.identity.clone(),
        })
    }

    /// Rebuild a claim from a stored value and the key's remaining lease
    pub fn decode(value: &str, remaining: Option<u64>) -> Result<Self, serde_json::Error> {
        let stored: StoredClaim = serde_json::from_str(value)?;
        Ok(Self {
            holder: stored.locker,
            identity: stored.identity,
            lease: remaining.filter(|secs| *secs > 0),
        })
    }
}

#[cfg(test)]
#[path = "claim_tests.rs"]
mod tests;
