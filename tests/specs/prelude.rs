//! Shared helpers for behavioral specs

pub use till_core::adapters::FakeMirror;
pub use till_core::codec;
pub use till_core::config::StoreConfig;
pub use till_core::row::SaleRow;
pub use till_core::{by_payment, by_product};
pub use till_storage::LedgerStore;

/// A store over a fresh temp directory. Keep the TempDir alive for the
/// duration of the test.
pub fn temp_store() -> (tempfile::TempDir, LedgerStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::open(&StoreConfig::new(dir.path().join("data"))).unwrap();
    (dir, store)
}

/// A store sharing the given mirror, over its own temp directory.
pub fn mirrored_store(mirror: &FakeMirror) -> (tempfile::TempDir, LedgerStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::with_mirror(
        &StoreConfig::new(dir.path().join("data")),
        Box::new(mirror.clone()),
    )
    .unwrap();
    (dir, store)
}

pub fn row(product: &str, price: i64, quantity: i64, payment: &str) -> SaleRow {
    SaleRow::new(product, price, quantity, payment)
}
