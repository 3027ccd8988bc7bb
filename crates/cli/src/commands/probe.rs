// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Probe command: artifact size without a download

use super::unexpected;
use crate::client::DaemonClient;
use anyhow::Result;
use till_daemon::protocol::{Request, Response};

pub async fn handle(client: &DaemonClient) -> Result<()> {
    match client.request(Request::Probe).await? {
        Response::Probe { size } => {
            println!("Artifact size: {} bytes", size);
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}
