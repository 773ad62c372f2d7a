// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod lock;
pub mod pass;
pub mod status;
pub mod unlock;
pub mod wait;

use crate::output::{self, OutputFormat};
use clap::Args;
use locker_core::{LockClaim, ResourceIdentity};
use serde::Serialize;
use std::fmt;

/// How a command ended, mapped to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Contended,
}

/// The claim presented by the caller
#[derive(Args, Debug, Clone)]
pub struct ClaimArgs {
    /// Holder of the claim, as <alias>:<id>
    #[arg(long)]
    pub holder: ResourceIdentity,

    /// Sub-identity distinguishing claims of the same holder
    #[arg(long)]
    pub identity: Option<String>,

    /// Lease in seconds (defaults to the configured default timeout)
    #[arg(long)]
    pub lease: Option<u64>,
}

impl ClaimArgs {
    pub fn claim(&self) -> LockClaim {
        let claim = LockClaim::new(&self.holder);
        let claim = match &self.identity {
            Some(identity) => claim.with_identity(identity.clone()),
            None => claim,
        };
        match self.lease {
            Some(lease) => claim.with_lease(lease),
            None => claim,
        }
    }
}

/// Result of a mutating command
#[derive(Debug, Serialize)]
pub struct LockReport {
    pub action: &'static str,
    pub resource: String,
    pub holder: String,
    pub identity: Option<String>,
    pub ok: bool,
}

impl LockReport {
    pub fn new(action: &'static str, resource: &ResourceIdentity, claim: &LockClaim, ok: bool) -> Self {
        Self {
            action,
            resource: resource.to_string(),
            holder: claim.holder.to_string(),
            identity: claim.identity.clone(),
            ok,
        }
    }

    /// Print to the stream matching the result and map to an outcome
    pub fn emit(&self, format: OutputFormat) -> Outcome {
        if self.ok {
            output::print(self, format);
            Outcome::Done
        } else {
            output::eprint(self, format);
            Outcome::Contended
        }
    }
}

impl fmt::Display for LockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = match &self.identity {
            Some(identity) => format!("{} [{}]", self.holder, identity),
            None => self.holder.clone(),
        };
        if self.ok {
            write!(f, "{}: {} for {}", self.action, self.resource, who)
        } else {
            write!(
                f,
                "{} refused: {} is locked by another claim than {}",
                self.action, self.resource, who
            )
        }
    }
}
