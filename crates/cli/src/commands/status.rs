// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `locker status <resource>` - Show who holds a lock

use super::Outcome;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use locker_core::{KeyValueStore, LockClaim, LockManager, ResourceIdentity};
use serde::Serialize;
use std::fmt;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Resource to inspect, as <alias>:<id>
    pub resource: ResourceIdentity,

    /// Also report whether this holder is blocked (exit 1 if so)
    #[arg(long = "for")]
    pub for_holder: Option<ResourceIdentity>,

    /// Sub-identity used with --for
    #[arg(long, requires = "for_holder")]
    pub identity: Option<String>,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    resource: String,
    locked: bool,
    holder: Option<String>,
    identity: Option<String>,
    lease: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    blocked: Option<bool>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.holder {
            None => write!(f, "{} is unlocked", self.resource)?,
            Some(holder) => {
                write!(f, "{} locked by {}", self.resource, holder)?;
                if let Some(identity) = &self.identity {
                    write!(f, " [{}]", identity)?;
                }
                if let Some(lease) = self.lease {
                    write!(f, " ({}s remaining)", lease)?;
                }
            }
        }
        match self.blocked {
            Some(true) => write!(f, "\nblocked"),
            Some(false) => write!(f, "\nnot blocked"),
            None => Ok(()),
        }
    }
}

pub async fn handle<S: KeyValueStore>(
    manager: &LockManager<S>,
    args: StatusArgs,
    format: OutputFormat,
) -> Result<Outcome> {
    let current = manager.get_lock(&args.resource).await?;

    let blocked = match &args.for_holder {
        Some(holder) => {
            let mut probe = LockClaim::new(holder);
            probe.identity = args.identity.clone();
            Some(manager.is_locked_for(&args.resource, &probe).await?)
        }
        None => None,
    };

    let report = StatusReport {
        resource: args.resource.to_string(),
        locked: current.is_some(),
        holder: current.as_ref().map(|c| c.holder.to_string()),
        identity: current.as_ref().and_then(|c| c.identity.clone()),
        lease: current.as_ref().and_then(|c| c.lease),
        blocked,
    };
    output::print(&report, format);

    Ok(if blocked == Some(true) {
        Outcome::Contended
    } else {
        Outcome::Done
    })
}
