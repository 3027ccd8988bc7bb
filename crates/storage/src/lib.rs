//! till-storage: durable storage of the sales ledger as one artifact

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod ledger;

pub use ledger::{LedgerStore, StorageError, ARTIFACT_NAME};
