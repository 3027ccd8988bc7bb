// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake mirror implementation for testing

use super::traits::{MirrorError, MirrorSink};
use std::sync::{Arc, Mutex, MutexGuard};

/// Recorded call to a mirror method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorCall {
    Put { len: usize },
    GetLatest,
}

#[derive(Debug, Default)]
struct FakeMirrorState {
    object: Option<Vec<u8>>,
    fail_puts: bool,
    fail_gets: bool,
    calls: Vec<MirrorCall>,
}

/// In-memory mirror with failure injection and call recording.
///
/// Clones share state, so a test can hand one clone to the store and
/// keep another to inspect or sabotage.
#[derive(Debug, Clone, Default)]
pub struct FakeMirror {
    inner: Arc<Mutex<FakeMirrorState>>,
}

impl FakeMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the remote object, as if another instance had pushed.
    pub fn set_object(&self, bytes: Vec<u8>) {
        self.lock().object = Some(bytes);
    }

    /// Current remote object, if any.
    pub fn object(&self) -> Option<Vec<u8>> {
        self.lock().object.clone()
    }

    /// Make subsequent `put` calls fail.
    pub fn fail_puts(&self, fail: bool) {
        self.lock().fail_puts = fail;
    }

    /// Make subsequent `get_latest` calls fail.
    pub fn fail_gets(&self, fail: bool) {
        self.lock().fail_gets = fail;
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<MirrorCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FakeMirrorState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MirrorSink for FakeMirror {
    fn put(&self, bytes: &[u8]) -> Result<(), MirrorError> {
        let mut state = self.lock();
        state.calls.push(MirrorCall::Put { len: bytes.len() });
        if state.fail_puts {
            return Err(MirrorError::Unavailable("injected put failure".into()));
        }
        state.object = Some(bytes.to_vec());
        Ok(())
    }

    fn get_latest(&self) -> Result<Option<Vec<u8>>, MirrorError> {
        let mut state = self.lock();
        state.calls.push(MirrorCall::GetLatest);
        if state.fail_gets {
            return Err(MirrorError::Unavailable("injected get failure".into()));
        }
        Ok(state.object.clone())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
