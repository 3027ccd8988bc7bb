// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! till - point-of-sale sales ledger CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::client::DaemonClient;
use crate::output::OutputFormat;
use till_core::config::StoreConfig;

#[derive(Parser)]
#[command(name = "till", version, about = "Till - point-of-sale sales ledger")]
struct Cli {
    /// Data directory holding the ledger artifact
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all recorded sales and running totals
    List,
    /// Record a sale
    Record(commands::record::RecordArgs),
    /// Remove every recorded sale
    Reset(commands::reset::ResetArgs),
    /// Download the raw ledger artifact
    Export(commands::export::ExportArgs),
    /// Show the artifact size without downloading it
    Probe,
    /// Daemon management
    Daemon(commands::daemon::DaemonArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut store = StoreConfig::from_env();
    if let Some(dir) = cli.data_dir {
        store.data_dir = dir;
    }

    match cli.command {
        Commands::List => commands::list::handle(&connect(&store).await?, cli.format).await,
        Commands::Record(args) => commands::record::handle(&connect(&store).await?, args).await,
        Commands::Reset(args) => commands::reset::handle(&store, args).await,
        Commands::Export(args) => commands::export::handle(&connect(&store).await?, args).await,
        Commands::Probe => commands::probe::handle(&connect(&store).await?).await,
        Commands::Daemon(args) => commands::daemon::handle(args, &store).await,
    }
}

async fn connect(store: &StoreConfig) -> Result<DaemonClient> {
    Ok(DaemonClient::connect_or_start(store).await?)
}
