// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `locker lock <resource> --holder <alias:id>` - Acquire or re-enter a lock

use super::{ClaimArgs, LockReport, Outcome};
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use locker_core::{KeyValueStore, LockManager, ResourceIdentity};

#[derive(Args, Debug)]
pub struct LockArgs {
    /// Resource to lock, as <alias>:<id>
    pub resource: ResourceIdentity,

    #[command(flatten)]
    pub claim: ClaimArgs,
}

pub async fn handle<S: KeyValueStore>(
    manager: &LockManager<S>,
    args: LockArgs,
    format: OutputFormat,
) -> Result<Outcome> {
    let claim = args.claim.claim();
    let acquired = manager.lock(&args.resource, &claim).await?;
    Ok(LockReport::new("lock", &args.resource, &claim, acquired).emit(format))
}
