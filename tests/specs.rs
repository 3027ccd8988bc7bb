//! Behavioral specifications for the till ledger.
//!
//! Ledger specs exercise the store, codec, and aggregator end to end
//! over temp directories. Black-box CLI tests live with the till
//! binary in crates/cli/tests/.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// ledger/
#[path = "specs/ledger/aggregates.rs"]
mod ledger_aggregates;
#[path = "specs/ledger/mirror.rs"]
mod ledger_mirror;
#[path = "specs/ledger/persistence.rs"]
mod ledger_persistence;
