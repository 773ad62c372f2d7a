// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `locker wait <resource> --holder <alias:id> --timeout 30s` - Poll until locked

use super::{ClaimArgs, LockReport, Outcome};
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use locker_core::{KeyValueStore, LockManager, ResourceIdentity};
use std::time::Duration;

#[derive(Args, Debug)]
pub struct WaitArgs {
    /// Resource to lock, as <alias>:<id>
    pub resource: ResourceIdentity,

    #[command(flatten)]
    pub claim: ClaimArgs,

    /// How long to keep trying (e.g. 500ms, 30s, 2m)
    #[arg(long, value_parser = humantime::parse_duration, default_value = "10s")]
    pub timeout: Duration,
}

pub async fn handle<S: KeyValueStore>(
    manager: &LockManager<S>,
    args: WaitArgs,
    format: OutputFormat,
) -> Result<Outcome> {
    let claim = args.claim.claim();
    let acquired = manager
        .wait_for_lock(&args.resource, &claim, args.timeout)
        .await?;
    Ok(LockReport::new("wait", &args.resource, &claim, acquired).emit(format))
}
