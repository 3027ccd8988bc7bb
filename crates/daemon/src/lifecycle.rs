// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: startup, shutdown, single-instance lock.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use fs2::FileExt;
use sha2::{Digest, Sha256};
use thiserror::Error;
use till_core::adapters::HttpMirror;
use till_core::config::StoreConfig;
use till_storage::LedgerStore;
use tokio::net::UnixListener;
use tracing::info;

/// Daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Ledger store configuration
    pub store: StoreConfig,
    /// Per-data-directory state directory
    pub state_dir: PathBuf,
    /// Path to Unix socket
    pub socket_path: PathBuf,
    /// Path to lock/PID file
    pub lock_path: PathBuf,
    /// Path to daemon log file
    pub log_path: PathBuf,
}

impl Config {
    /// Create config from the environment-resolved store configuration
    pub fn from_env() -> Result<Self, LifecycleError> {
        Self::for_store(StoreConfig::from_env())
    }

    /// Create config for a specific store. Socket, lock, and log live
    /// under a state directory keyed by a hash of the data directory so
    /// each data directory gets exactly one daemon.
    pub fn for_store(store: StoreConfig) -> Result<Self, LifecycleError> {
        let hash = dir_hash(&store.data_dir);
        let state_dir = state_dir()?.join("instances").join(&hash);
        let socket_dir = socket_dir();

        Ok(Self {
            socket_path: socket_dir.join(format!("{}.sock", hash)),
            lock_path: state_dir.join("tilld.pid"),
            log_path: state_dir.join("tilld.log"),
            state_dir,
            store,
        })
    }
}

/// Errors from lifecycle operations
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("daemon already running for this data directory (lock: {0})")]
    AlreadyRunning(PathBuf),
    #[error("could not determine state directory")]
    NoStateDir,
    #[error("storage error: {0}")]
    Storage(#[from] till_storage::StorageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Daemon state during operation
pub struct DaemonState {
    /// Configuration
    pub config: Config,
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    #[allow(dead_code)]
    lock_file: File,
    /// Unix socket listener
    pub listener: UnixListener,
    /// The ledger store all requests operate on
    pub store: LedgerStore,
    /// Daemon start time
    pub start_time: Instant,
    /// Set when a client asked us to shut down
    pub shutdown_requested: bool,
}

impl DaemonState {
    /// Remove the socket so clients stop finding us
    pub fn shutdown(&mut self) -> Result<(), LifecycleError> {
        if self.config.socket_path.exists() {
            fs::remove_file(&self.config.socket_path)?;
        }
        info!("daemon shut down");
        Ok(())
    }
}

/// Start the daemon: take the exclusive lock, bind the socket, and open
/// the store (with an HTTP mirror when one is configured).
pub async fn startup(config: &Config) -> Result<DaemonState, LifecycleError> {
    fs::create_dir_all(&config.state_dir)?;
    if let Some(parent) = config.socket_path.parent() {
        fs::create_dir_all(parent)?;
    }

    // One daemon per data directory
    let mut lock_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(&config.lock_path)?;
    lock_file
        .try_lock_exclusive()
        .map_err(|_| LifecycleError::AlreadyRunning(config.lock_path.clone()))?;
    lock_file.set_len(0)?;
    writeln!(lock_file, "{}", std::process::id())?;

    // Stale socket from an unclean shutdown; the lock proves no one is
    // listening on it
    if config.socket_path.exists() {
        fs::remove_file(&config.socket_path)?;
    }
    let listener = UnixListener::bind(&config.socket_path)?;

    let store = match &config.store.mirror {
        Some(mirror) => {
            info!("mirroring artifact to {}", mirror.base_url);
            LedgerStore::with_mirror(&config.store, Box::new(HttpMirror::new(mirror)))?
        }
        None => LedgerStore::open(&config.store)?,
    };

    info!(
        "store ready, artifact at {}",
        store.csv_path().display()
    );

    Ok(DaemonState {
        config: config.clone(),
        lock_file,
        listener,
        store,
        start_time: Instant::now(),
        shutdown_requested: false,
    })
}

/// Short stable hash of a data directory path
fn dir_hash(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    let digest = hasher.finalize();
    digest[..8].iter().map(|b| format!("{:02x}", b)).collect()
}

fn state_dir() -> Result<PathBuf, LifecycleError> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("till"))
        .ok_or(LifecycleError::NoStateDir)
}

fn socket_dir() -> PathBuf {
    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("till")
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
