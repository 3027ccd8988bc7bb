// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Export command: download the raw artifact bytes

use super::unexpected;
use crate::client::DaemonClient;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use till_daemon::protocol::{Request, Response};

#[derive(clap::Args)]
pub struct ExportArgs {
    /// Write the artifact to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn handle(client: &DaemonClient, args: ExportArgs) -> Result<()> {
    match client.request(Request::Export).await? {
        Response::Export {
            filename, bytes, ..
        } => {
            match args.output {
                Some(path) => {
                    std::fs::write(&path, &bytes)?;
                    println!(
                        "Wrote {} bytes to {} (as {})",
                        bytes.len(),
                        path.display(),
                        filename
                    );
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&bytes)?;
                    stdout.flush()?;
                }
            }
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}
