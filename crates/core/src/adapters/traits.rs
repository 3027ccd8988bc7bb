// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mirror port definition: a durable object sink holding the latest
//! full copy of the artifact.

use thiserror::Error;

/// Errors from mirror operations. The store downgrades these to log
/// events at its boundary; they never cross its public contract.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("mirror unavailable: {0}")]
    Unavailable(String),
    #[error("mirror request timed out")]
    Timeout,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable object sink for the artifact's remote copy.
///
/// The remote copy is eventually consistent: `put` replaces the whole
/// object, `get_latest` fetches it, and an absent object is a normal
/// state (`Ok(None)`), not an error.
pub trait MirrorSink: Send + Sync {
    /// Replace the remote object with the full artifact bytes.
    fn put(&self, bytes: &[u8]) -> Result<(), MirrorError>;

    /// Fetch the latest remote object, or `None` if it does not exist.
    fn get_latest(&self) -> Result<Option<Vec<u8>>, MirrorError>;
}
