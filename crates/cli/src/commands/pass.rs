// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `locker pass <resource> --from <alias:id> --to <alias:id>` - Hand a lock over

use super::{LockReport, Outcome};
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use locker_core::{KeyValueStore, LockClaim, LockManager, ResourceIdentity};

#[derive(Args, Debug)]
pub struct PassArgs {
    /// Resource to hand over, as <alias>:<id>
    pub resource: ResourceIdentity,

    /// Current holder, as <alias>:<id>
    #[arg(long)]
    pub from: ResourceIdentity,

    /// Sub-identity of the current holder
    #[arg(long)]
    pub from_identity: Option<String>,

    /// Next holder, as <alias>:<id>
    #[arg(long)]
    pub to: ResourceIdentity,

    /// Sub-identity of the next holder
    #[arg(long)]
    pub to_identity: Option<String>,

    /// Lease for the next holder in seconds
    #[arg(long)]
    pub lease: Option<u64>,
}

impl PassArgs {
    fn claims(&self) -> (LockClaim, LockClaim) {
        let mut current = LockClaim::new(&self.from);
        current.identity = self.from_identity.clone();
        let mut next = LockClaim::new(&self.to);
        next.identity = self.to_identity.clone();
        next.lease = self.lease;
        (current, next)
    }
}

pub async fn handle<S: KeyValueStore>(
    manager: &LockManager<S>,
    args: PassArgs,
    format: OutputFormat,
) -> Result<Outcome> {
    let (current, next) = args.claims();
    let passed = manager.pass_lock(&args.resource, &current, &next).await?;
    let claim = if passed { &next } else { &current };
    Ok(LockReport::new("pass", &args.resource, claim, passed).emit(format))
}
