// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! locker - Distributed resource locks over Redis

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{lock, pass, status, unlock, wait, Outcome};
use locker_adapters::{RedisStore, TracedStore};
use locker_core::{LockManager, LockerConfig};
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "locker",
    version,
    about = "Locker - Distributed resource locks over Redis"
)]
struct Cli {
    /// Redis server URL
    #[arg(
        long,
        global = true,
        env = "LOCKER_REDIS_URL",
        default_value = "redis://127.0.0.1/"
    )]
    redis_url: String,

    /// TOML file with lock settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the key prefix from the config
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log store traffic to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Acquire a lock, or extend one already held by the same claim
    Lock(lock::LockArgs),
    /// Release a lock held by the same claim
    Unlock(unlock::UnlockArgs),
    /// Hand a lock from one claim to another
    Pass(pass::PassArgs),
    /// Show the current holder of a lock
    Status(status::StatusArgs),
    /// Retry acquiring a lock until it succeeds or the timeout passes
    Wait(wait::WaitArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Contended) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome> {
    let config = load_config(cli.config.as_deref(), cli.prefix)?;
    let store = RedisStore::open(&cli.redis_url)
        .with_context(|| format!("invalid redis url {}", cli.redis_url))?;
    tracing::debug!(store = ?store, prefix = %config.key_prefix, "using store");
    let manager = LockManager::new(TracedStore::new(store), config);
    let format = cli.format;

    match cli.command {
        Commands::Lock(args) => lock::handle(&manager, args, format).await,
        Commands::Unlock(args) => unlock::handle(&manager, args, format).await,
        Commands::Pass(args) => pass::handle(&manager, args, format).await,
        Commands::Status(args) => status::handle(&manager, args, format).await,
        Commands::Wait(args) => wait::handle(&manager, args, format).await,
    }
}

fn load_config(path: Option<&std::path::Path>, prefix: Option<String>) -> Result<LockerConfig> {
    let mut config = match path {
        Some(path) => LockerConfig::load(path)?,
        None => LockerConfig::default(),
    };
    if let Some(prefix) = prefix {
        config = config.with_key_prefix(prefix);
    }
    config.validate()?;
    Ok(config)
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout is reserved for command output
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
