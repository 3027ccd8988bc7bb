// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only ledger store.
//!
//! The ledger lives in a single CSV artifact under the configured data
//! directory. The artifact is created lazily on first append (with a
//! byte-order marker and header), rows are appended as unheadered
//! lines, and reset removes the artifact entirely. A missing artifact
//! always means an empty ledger, never an error.
//!
//! When a mirror sink is attached, reads pull the remote copy into the
//! local file first and writes push the full updated artifact after the
//! local operation succeeds. Mirror failures are logged and the store
//! degrades to local-only; the remote copy is eventually consistent,
//! not authoritative-on-write.
//!
//! Every operation holds an internal mutex, so callers sharing one
//! store cannot interleave read-modify-write cycles. Writers that
//! bypass the store (or a second process on the same directory) are
//! not serialized; the daemon's exclusive lock covers that case.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use till_core::adapters::MirrorSink;
use till_core::codec::{self, CodecError, BOM_BYTES};
use till_core::config::StoreConfig;
use till_core::row::SaleRow;
use tracing::{debug, warn};

/// File name of the artifact inside the data directory.
pub const ARTIFACT_NAME: &str = "sales.csv";

/// Errors from ledger store operations. Local filesystem failures are
/// fatal to the operation; mirror failures never appear here.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Durable store for the sales ledger.
pub struct LedgerStore {
    data_dir: PathBuf,
    csv_path: PathBuf,
    mirror: Option<Box<dyn MirrorSink>>,
    // Serializes read-modify-write cycles within this process
    op_lock: Mutex<()>,
}

impl LedgerStore {
    /// Open a store with no mirror.
    pub fn open(config: &StoreConfig) -> Result<Self, StorageError> {
        Self::build(config, None)
    }

    /// Open a store backed by the given mirror sink.
    pub fn with_mirror(
        config: &StoreConfig,
        mirror: Box<dyn MirrorSink>,
    ) -> Result<Self, StorageError> {
        Self::build(config, Some(mirror))
    }

    fn build(
        config: &StoreConfig,
        mirror: Option<Box<dyn MirrorSink>>,
    ) -> Result<Self, StorageError> {
        let data_dir = config.data_dir.clone();
        fs::create_dir_all(&data_dir)?;
        let csv_path = data_dir.join(ARTIFACT_NAME);
        Ok(Self {
            data_dir,
            csv_path,
            mirror,
            op_lock: Mutex::new(()),
        })
    }

    /// Path of the local artifact.
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Full ledger in insertion order. A missing artifact is a normal
    /// state and returns an empty sequence.
    pub fn load_all(&self) -> Result<Vec<SaleRow>, StorageError> {
        let _guard = self.lock();
        self.pull_mirror();
        match fs::read(&self.csv_path) {
            Ok(bytes) => Ok(codec::decode(&String::from_utf8_lossy(&bytes))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Append one row at the end of the ledger, creating the artifact
    /// (byte-order marker + header) if it does not exist yet.
    pub fn append(&self, row: &SaleRow) -> Result<(), StorageError> {
        let _guard = self.lock();
        fs::create_dir_all(&self.data_dir)?;
        if self.csv_path.exists() {
            let line = codec::encode(std::slice::from_ref(row), false)?;
            let mut file = OpenOptions::new().append(true).open(&self.csv_path)?;
            file.write_all(line.as_bytes())?;
        } else {
            let document = codec::encode(std::slice::from_ref(row), true)?;
            let mut content = Vec::with_capacity(BOM_BYTES.len() + document.len());
            content.extend_from_slice(BOM_BYTES);
            content.extend_from_slice(document.as_bytes());
            fs::write(&self.csv_path, content)?;
        }
        self.push_mirror();
        Ok(())
    }

    /// Remove all rows. Idempotent: resetting an already-empty ledger
    /// succeeds.
    pub fn reset(&self) -> Result<(), StorageError> {
        let _guard = self.lock();
        match fs::remove_file(&self.csv_path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        self.push_mirror();
        Ok(())
    }

    /// Exact artifact bytes as they would be downloaded. An absent
    /// artifact yields a synthetic minimal document (byte-order marker
    /// plus header), never empty bytes.
    pub fn export_raw(&self) -> Result<Vec<u8>, StorageError> {
        let _guard = self.lock();
        self.pull_mirror();
        match fs::read(&self.csv_path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(empty_artifact()),
            Err(err) => Err(err.into()),
        }
    }

    /// Size in bytes of what [`export_raw`](Self::export_raw) would
    /// return, without reading rows. Serves existence probes.
    pub fn artifact_len(&self) -> Result<u64, StorageError> {
        let _guard = self.lock();
        self.pull_mirror();
        match fs::metadata(&self.csv_path) {
            Ok(meta) => Ok(meta.len()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Ok(empty_artifact().len() as u64)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Refresh the local artifact from the mirror before a read.
    /// Any mirror failure falls back silently to the local copy.
    fn pull_mirror(&self) {
        let Some(mirror) = &self.mirror else {
            return;
        };
        match mirror.get_latest() {
            Ok(Some(bytes)) => {
                if let Err(err) = fs::create_dir_all(&self.data_dir)
                    .and_then(|()| fs::write(&self.csv_path, &bytes))
                {
                    warn!("failed to refresh local artifact from mirror: {}", err);
                } else {
                    debug!("refreshed local artifact from mirror ({} bytes)", bytes.len());
                }
            }
            Ok(None) => {}
            Err(err) => warn!("mirror fetch failed, using local copy: {}", err),
        }
    }

    /// Push the full updated artifact after a write. Push failure
    /// leaves the remote stale until the next successful push and is
    /// never surfaced to the caller.
    fn push_mirror(&self) {
        let Some(mirror) = &self.mirror else {
            return;
        };
        let bytes = match fs::read(&self.csv_path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => empty_artifact(),
            Err(err) => {
                warn!("could not read artifact for mirror push: {}", err);
                return;
            }
        };
        if let Err(err) = mirror.put(&bytes) {
            warn!("mirror push failed, remote copy is stale: {}", err);
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.op_lock.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn empty_artifact() -> Vec<u8> {
    let document = codec::empty_document();
    let mut bytes = Vec::with_capacity(BOM_BYTES.len() + document.len());
    bytes.extend_from_slice(BOM_BYTES);
    bytes.extend_from_slice(document.as_bytes());
    bytes
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
