// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource identities
//!
//! A lock is keyed by the identity of the thing being locked, and a claim
//! names its holder by the same kind of identity. Both serialize to
//! canonical JSON so equal identities always produce equal bytes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identity of a lockable entity: its type alias plus primary key
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentity {
    pub alias: String,
    pub id: String,
}

/// Errors parsing an `alias:id` string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceParseError {
    #[error("expected <alias>:<id>, got {0:?}")]
    MissingSeparator(String),
    #[error("alias and id must both be non-empty in {0:?}")]
    EmptyPart(String),
}

impl ResourceIdentity {
    pub fn new(alias: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            id: id.into(),
        }
    }

    /// Parse `alias:id`. Everything after the first `:` is the id.
    pub fn parse(input: &str) -> Result<Self, ResourceParseError> {
        let (alias, id) = input
            .split_once(':')
            .ok_or_else(|| ResourceParseError::MissingSeparator(input.to_string()))?;
        if alias.is_empty() || id.is_empty() {
            return Err(ResourceParseError::EmptyPart(input.to_string()));
        }
        Ok(Self::new(alias, id))
    }

    /// Canonical JSON form, used as key-suffix material
    pub fn canonical(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.alias, self.id)
    }
}

impl std::str::FromStr for ResourceIdentity {
    type Err = ResourceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Anything that can be turned into a [`ResourceIdentity`]
pub trait Lockable {
    fn resource_identity(&self) -> ResourceIdentity;
}

impl Lockable for ResourceIdentity {
    fn resource_identity(&self) -> ResourceIdentity {
        self.clone()
    }
}

impl<T: Lockable + ?Sized> Lockable for &T {
    fn resource_identity(&self) -> ResourceIdentity {
        (**self).resource_identity()
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
