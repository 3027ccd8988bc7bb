// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reset command: destroy every recorded sale

use super::unexpected;
use crate::client::DaemonClient;
use anyhow::{bail, Result};
use till_core::config::StoreConfig;
use till_daemon::protocol::{Request, Response};

#[derive(clap::Args)]
pub struct ResetArgs {
    /// Confirm the reset; it destroys the whole ledger
    #[arg(long)]
    pub yes: bool,
}

/// Validates the confirmation flag before touching the daemon so a
/// refused reset never auto-starts one.
pub async fn handle(store: &StoreConfig, args: ResetArgs) -> Result<()> {
    if !args.yes {
        bail!("refusing to reset the ledger without --yes");
    }
    let client = DaemonClient::connect_or_start(store).await?;
    match client.request(Request::ResetAll).await? {
        Response::ResetDone => {
            println!("Ledger reset");
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}
