//! till-core: Core library for the till sales ledger
//!
//! This crate provides:
//! - The sale row domain types and the fixed CSV column set
//! - The row codec (CSV encode/decode with BOM and quoting rules)
//! - Pure aggregation over loaded rows
//! - Store configuration resolution
//! - The mirror port (trait, fake, and HTTP implementation)

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod aggregate;
pub mod codec;
pub mod config;
pub mod row;

// Re-exports
pub use aggregate::{by_payment, by_product, PaymentTotal, ProductTotal};
pub use codec::{decode, encode, CodecError};
pub use config::{MirrorConfig, StoreConfig};
pub use row::{PaymentMethod, SaleRow, CSV_COLUMNS};

// Re-export adapters
pub use adapters::{FakeMirror, HttpMirror, MirrorCall, MirrorError, MirrorSink};
