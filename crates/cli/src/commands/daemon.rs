// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon management commands

use crate::client::{ClientError, DaemonClient};
use anyhow::Result;
use till_core::config::StoreConfig;
use till_daemon::protocol::{Request, Response};

#[derive(clap::Args)]
pub struct DaemonArgs {
    #[command(subcommand)]
    pub command: DaemonCommand,
}

#[derive(clap::Subcommand)]
pub enum DaemonCommand {
    /// Start the daemon for this data directory
    Start,
    /// Stop a running daemon
    Stop,
    /// Show daemon status
    Status,
}

pub async fn handle(args: DaemonArgs, store: &StoreConfig) -> Result<()> {
    match args.command {
        DaemonCommand::Start => start(store).await,
        DaemonCommand::Stop => stop(store).await,
        DaemonCommand::Status => status(store).await,
    }
}

async fn start(store: &StoreConfig) -> Result<()> {
    DaemonClient::connect_or_start(store).await?;
    println!("Daemon started");
    Ok(())
}

async fn stop(store: &StoreConfig) -> Result<()> {
    let client = match DaemonClient::connect(store).await {
        Ok(client) => client,
        Err(ClientError::DaemonNotRunning) => {
            println!("Daemon not running");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    match client.request(Request::Shutdown).await? {
        Response::ShuttingDown => {
            println!("Daemon stopped");
            Ok(())
        }
        other => Err(super::unexpected(other)),
    }
}

async fn status(store: &StoreConfig) -> Result<()> {
    let client = match DaemonClient::connect(store).await {
        Ok(client) => client,
        Err(ClientError::DaemonNotRunning) => {
            println!("Daemon not running");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    match client
        .request(Request::Hello {
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
        .await?
    {
        Response::Hello { version } => {
            println!("Status: running");
            println!("Version: {}", version);
            Ok(())
        }
        other => Err(super::unexpected(other)),
    }
}
