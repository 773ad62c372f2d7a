// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `locker unlock <resource> --holder <alias:id>` - Release a lock

use super::{ClaimArgs, LockReport, Outcome};
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use locker_core::{KeyValueStore, LockManager, ResourceIdentity};

#[derive(Args, Debug)]
pub struct UnlockArgs {
    /// Resource to release, as <alias>:<id>
    pub resource: ResourceIdentity,

    #[command(flatten)]
    pub claim: ClaimArgs,
}

pub async fn handle<S: KeyValueStore>(
    manager: &LockManager<S>,
    args: UnlockArgs,
    format: OutputFormat,
) -> Result<Outcome> {
    let claim = args.claim.claim();
    let released = manager.unlock(&args.resource, &claim).await?;
    Ok(LockReport::new("unlock", &args.resource, &claim, released).emit(format))
}
