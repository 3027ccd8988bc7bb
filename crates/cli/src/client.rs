// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon client for CLI commands

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use thiserror::Error;
use till_core::config::StoreConfig;
use till_daemon::lifecycle::Config;
use till_daemon::protocol::{self, ProtocolError, Request, Response};
use tokio::net::UnixStream;

// Timeout configuration (env vars in milliseconds)
fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Timeout for IPC requests
pub fn timeout_ipc() -> Duration {
    parse_duration_ms("TILL_TIMEOUT_IPC_MS").unwrap_or(Duration::from_secs(5))
}

/// Timeout for waiting for the daemon to start
pub fn timeout_connect() -> Duration {
    parse_duration_ms("TILL_TIMEOUT_CONNECT_MS").unwrap_or(Duration::from_secs(5))
}

/// Polling interval for retries
pub fn poll_interval() -> Duration {
    parse_duration_ms("TILL_POLL_INTERVAL_MS").unwrap_or(Duration::from_millis(50))
}

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Daemon not running")]
    DaemonNotRunning,

    #[error("Failed to start daemon: {0}")]
    DaemonStartFailed(String),

    #[error("Connection timeout waiting for daemon to start")]
    DaemonStartTimeout,

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Unexpected response from daemon")]
    UnexpectedResponse,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine state directory")]
    NoStateDir,
}

/// Daemon client
pub struct DaemonClient {
    socket_path: PathBuf,
}

impl DaemonClient {
    /// Connect to the daemon, auto-starting it if not running
    pub async fn connect_or_start(store: &StoreConfig) -> Result<Self, ClientError> {
        match Self::connect(store).await {
            Ok(client) => Ok(client),
            Err(ClientError::DaemonNotRunning) => {
                // Start daemon in background, then wait for the socket
                // with retry, watching for early exit
                let child = start_daemon_background(store)?;
                Self::connect_with_retry(store, timeout_connect(), child).await
            }
            Err(e) => Err(e),
        }
    }

    /// Connect to an existing daemon (no auto-start)
    pub async fn connect(store: &StoreConfig) -> Result<Self, ClientError> {
        let client = Self {
            socket_path: socket_path_for(store)?,
        };
        match client.request(Request::Ping).await? {
            Response::Pong => Ok(client),
            _ => Err(ClientError::UnexpectedResponse),
        }
    }

    async fn connect_with_retry(
        store: &StoreConfig,
        timeout: Duration,
        mut child: Child,
    ) -> Result<Self, ClientError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Err(ClientError::DaemonStartFailed(format!(
                    "tilld exited early with {}",
                    status
                )));
            }
            match Self::connect(store).await {
                Ok(client) => return Ok(client),
                Err(ClientError::DaemonNotRunning) => {}
                Err(e) => return Err(e),
            }
            if Instant::now() >= deadline {
                return Err(ClientError::DaemonStartTimeout);
            }
            tokio::time::sleep(poll_interval()).await;
        }
    }

    /// Send one request and read the response
    pub async fn request(&self, request: Request) -> Result<Response, ClientError> {
        let mut stream = match UnixStream::connect(&self.socket_path).await {
            Ok(stream) => stream,
            Err(_) => return Err(ClientError::DaemonNotRunning),
        };
        let (mut reader, mut writer) = stream.split();
        protocol::write_request(&mut writer, &request, timeout_ipc()).await?;
        let response = protocol::read_response(&mut reader, timeout_ipc()).await?;
        Ok(response)
    }
}

fn socket_path_for(store: &StoreConfig) -> Result<PathBuf, ClientError> {
    let config = Config::for_store(store.clone()).map_err(|_| ClientError::NoStateDir)?;
    Ok(config.socket_path)
}

/// Spawn tilld detached from the CLI. Looks for the binary next to the
/// current executable first, then falls back to PATH.
fn start_daemon_background(store: &StoreConfig) -> Result<Child, ClientError> {
    let exe = std::env::current_exe()?;
    let tilld = exe
        .parent()
        .map(|dir| dir.join("tilld"))
        .filter(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from("tilld"));

    Command::new(tilld)
        .arg(&store.data_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClientError::DaemonStartFailed(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
