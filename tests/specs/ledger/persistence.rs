//! Ledger persistence specs
//!
//! Verify the append-only artifact lifecycle: lazy creation, append
//! monotonicity, reset idempotence, and raw export.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn never_written_store_loads_empty() {
    let (_dir, store) = temp_store();
    assert_eq!(store.load_all().unwrap(), Vec::<SaleRow>::new());
}

#[test]
fn append_is_monotonic() {
    let (_dir, store) = temp_store();
    let mut expected = Vec::new();

    for (i, payment) in ["cash", "card", "cash"].iter().enumerate() {
        let r = row(&format!("item-{}", i), 100 * (i as i64 + 1), 1, payment);
        store.append(&r).unwrap();
        expected.push(r);
        assert_eq!(store.load_all().unwrap(), expected);
    }
}

#[test]
fn artifact_text_matches_the_documented_format() {
    let (_dir, store) = temp_store();
    store.append(&row("coffee", 1000, 2, "cash")).unwrap();
    store.append(&row("latte, iced", 4500, 1, "card")).unwrap();

    let text = String::from_utf8(store.export_raw().unwrap()).unwrap();
    assert_eq!(
        text,
        "\u{feff}productName,price,quantity,paymentMethod\n\
         coffee,1000,2,cash\n\
         \"latte, iced\",4500,1,card\n"
    );
}

#[test]
fn reset_twice_is_harmless() {
    let (_dir, store) = temp_store();
    store.append(&row("coffee", 1000, 2, "cash")).unwrap();

    store.reset().unwrap();
    assert!(store.load_all().unwrap().is_empty());
    store.reset().unwrap();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn freshly_reset_store_exports_header_only_document() {
    let (_dir, store) = temp_store();
    store.append(&row("coffee", 1000, 2, "cash")).unwrap();
    store.reset().unwrap();

    let bytes = store.export_raw().unwrap();
    assert!(!bytes.is_empty());
    let text = String::from_utf8(bytes).unwrap();
    let stripped = text.strip_prefix('\u{feff}').unwrap();
    assert_eq!(stripped, "productName,price,quantity,paymentMethod\n");
    assert!(codec::decode(&text).is_empty());
}

#[test]
fn corrupt_line_does_not_lose_the_rest_of_the_ledger() {
    use std::io::Write;

    let (_dir, store) = temp_store();
    store.append(&row("coffee", 1000, 2, "cash")).unwrap();

    // A truncated record, as if a writer died mid-line
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(store.csv_path())
        .unwrap();
    writeln!(file, "tea,oops").unwrap();
    drop(file);

    store.append(&row("scone", 300, 1, "card")).unwrap();

    let rows = store.load_all().unwrap();
    assert!(rows.contains(&row("coffee", 1000, 2, "cash")));
    assert!(rows.contains(&row("scone", 300, 1, "card")));
    // The short record zero-fills its missing fields instead of
    // aborting the decode
    assert!(rows.contains(&row("tea", 0, 0, "")));
}

#[test]
fn historical_free_text_payments_survive_a_roundtrip() {
    let (_dir, store) = temp_store();
    store.append(&row("커피", 1000, 2, "현금")).unwrap();
    store.append(&row("coffee", 1000, 1, "card")).unwrap();

    let rows = store.load_all().unwrap();
    assert_eq!(rows[0].payment, "현금");
}
