// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP blob mirror: GET/PUT of the whole artifact against a base URL
//! and object key. Every call is bounded by the agent timeout so a
//! slow mirror degrades instead of blocking the store.

use super::traits::{MirrorError, MirrorSink};
use crate::config::MirrorConfig;
use std::time::Duration;
use ureq::Agent;

/// Default bound on a whole mirror call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HttpMirror {
    agent: Agent,
    url: String,
}

impl HttpMirror {
    pub fn new(config: &MirrorConfig) -> Self {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(config: &MirrorConfig, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            url: object_url(&config.base_url, &config.key),
        }
    }

    /// Full URL of the mirrored object.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MirrorSink for HttpMirror {
    fn put(&self, bytes: &[u8]) -> Result<(), MirrorError> {
        self.agent
            .put(&self.url)
            .header("Content-Type", "text/csv; charset=utf-8")
            .send(bytes)
            .map_err(map_err)?;
        Ok(())
    }

    fn get_latest(&self) -> Result<Option<Vec<u8>>, MirrorError> {
        let mut response = match self.agent.get(&self.url).call() {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(404)) => return Ok(None),
            Err(err) => return Err(map_err(err)),
        };
        let bytes = response.body_mut().read_to_vec().map_err(map_err)?;
        Ok(Some(bytes))
    }
}

fn map_err(err: ureq::Error) -> MirrorError {
    match err {
        ureq::Error::Timeout(_) => MirrorError::Timeout,
        other => MirrorError::Unavailable(other.to_string()),
    }
}

fn object_url(base_url: &str, key: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
