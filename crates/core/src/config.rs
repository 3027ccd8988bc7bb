// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store configuration, resolved once at startup and injected into the
//! ledger store rather than looked up process-wide.

use std::env;
use std::path::PathBuf;

/// Explicit override for the data directory.
pub const DATA_DIR_ENV: &str = "TILL_DATA_DIR";
/// Truthy when the execution environment has a read-only filesystem
/// apart from the system temp directory.
pub const RESTRICTED_FS_ENV: &str = "TILL_RESTRICTED_FS";
/// Base URL of the remote mirror; absent means no mirror.
pub const MIRROR_URL_ENV: &str = "TILL_MIRROR_URL";
/// Object key under the mirror base URL.
pub const MIRROR_KEY_ENV: &str = "TILL_MIRROR_KEY";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_MIRROR_KEY: &str = "sales.csv";

/// Remote mirror location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    pub base_url: String,
    pub key: String,
}

/// Ledger store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the artifact.
    pub data_dir: PathBuf,
    /// Optional remote mirror; the store degrades to local-only when
    /// mirror calls fail.
    pub mirror: Option<MirrorConfig>,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            mirror: None,
        }
    }

    pub fn with_mirror(mut self, base_url: impl Into<String>, key: impl Into<String>) -> Self {
        self.mirror = Some(MirrorConfig {
            base_url: base_url.into(),
            key: key.into(),
        });
        self
    }

    /// Resolve configuration from the environment: explicit directory
    /// override, then restricted-filesystem fallback, then the default
    /// local directory.
    pub fn from_env() -> Self {
        let override_dir = env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .filter(|dir| !dir.as_os_str().is_empty());
        let restricted = env::var(RESTRICTED_FS_ENV)
            .map(|v| truthy(&v))
            .unwrap_or(false);
        Self {
            data_dir: resolve_data_dir(override_dir, restricted, PathBuf::from(DEFAULT_DATA_DIR)),
            mirror: mirror_from(
                env::var(MIRROR_URL_ENV).ok(),
                env::var(MIRROR_KEY_ENV).ok(),
            ),
        }
    }
}

/// Data directory precedence: override, restricted-FS temp directory,
/// fallback.
pub fn resolve_data_dir(
    override_dir: Option<PathBuf>,
    restricted_fs: bool,
    fallback: PathBuf,
) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    if restricted_fs {
        return env::temp_dir().join("till_data");
    }
    fallback
}

pub fn mirror_from(base_url: Option<String>, key: Option<String>) -> Option<MirrorConfig> {
    let base_url = base_url?.trim().to_string();
    if base_url.is_empty() {
        return None;
    }
    Some(MirrorConfig {
        base_url,
        key: key
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MIRROR_KEY.to_string()),
    })
}

fn truthy(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "TRUE" | "yes")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
