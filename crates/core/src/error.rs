// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lock protocol errors

use crate::store::StoreError;
use thiserror::Error;

/// Errors from lock manager operations
///
/// Contention is not an error by default: operations report it as `Ok(false)`.
/// Use [`ContentionExt::or_contention`] to turn it into one.
#[derive(Debug, Error)]
pub enum LockError {
    #[error("lock timeout should be between 1 and {max} seconds, got {requested}")]
    InvalidTimeout { requested: u64, max: u64 },
    #[error("{resource} is locked by another claim")]
    Contention { resource: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed lock claim: {0}")]
    Codec(#[from] serde_json::Error),
}

impl LockError {
    pub fn contention(resource: impl std::fmt::Display) -> Self {
        LockError::Contention {
            resource: resource.to_string(),
        }
    }
}

/// Raise a caller-supplied error instead of returning `false`
pub trait ContentionExt {
    /// `Ok(true)` becomes `Ok(())`, `Ok(false)` becomes `Err(err)`, and any
    /// [`LockError`] is converted into `E`.
    fn or_contention<E: From<LockError>>(self, err: E) -> Result<(), E>;
}

impl ContentionExt for Result<bool, LockError> {
    fn or_contention<E: From<LockError>>(self, err: E) -> Result<(), E> {
        match self {
            Ok(true) => Ok(()),
            Ok(false) => Err(err),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
