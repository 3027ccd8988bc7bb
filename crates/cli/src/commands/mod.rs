// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod daemon;
pub mod export;
pub mod list;
pub mod probe;
pub mod record;
pub mod reset;

use till_daemon::protocol::Response;

/// Turn a non-success response into a command error. Validation
/// rejections and server failures carry the daemon's message.
fn unexpected(response: Response) -> anyhow::Error {
    match response {
        Response::Invalid { message } => anyhow::anyhow!("invalid input: {}", message),
        Response::Error { message } => anyhow::anyhow!("daemon error: {}", message),
        other => anyhow::anyhow!("unexpected response from daemon: {:?}", other),
    }
}
