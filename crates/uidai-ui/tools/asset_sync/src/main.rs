#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Command-line entry point for copying pipeline charts into the dashboard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use asset_sync::{SyncOptions, default_dest, sync_charts};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "asset_sync",
    about = "Copy the analysis pipeline's chart PNGs into the dashboard static directory"
)]
struct Cli {
    /// Pipeline output directory containing the eight chart PNGs.
    #[arg(long, env = "UIDAI_PIPELINE_OUTPUTS", default_value = "outputs")]
    source: PathBuf,
    /// Destination directory; defaults to the UI crate's `static/outputs`.
    #[arg(long, env = "UIDAI_ASSET_DEST")]
    dest: Option<PathBuf>,
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err.to_string()))
        .context("failed to install tracing subscriber")
}

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();
    let dest = match cli.dest {
        Some(dest) => dest,
        None => default_dest().context("failed to resolve default destination")?,
    };
    sync_charts(&SyncOptions {
        source: cli.source,
        dest,
    })
    .context("asset sync failed")?;
    Ok(())
}
