// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn payment_parse_accepts_canonical_tokens() {
    assert_eq!(PaymentMethod::parse("cash"), Some(PaymentMethod::Cash));
    assert_eq!(PaymentMethod::parse("card"), Some(PaymentMethod::Card));
}

#[test]
fn payment_parse_is_case_insensitive_and_trims() {
    assert_eq!(PaymentMethod::parse(" CASH "), Some(PaymentMethod::Cash));
    assert_eq!(PaymentMethod::parse("Card"), Some(PaymentMethod::Card));
}

#[test]
fn payment_parse_rejects_unknown_tokens() {
    assert_eq!(PaymentMethod::parse("check"), None);
    assert_eq!(PaymentMethod::parse(""), None);
}

#[test]
fn payment_display_matches_stored_token() {
    assert_eq!(PaymentMethod::Cash.to_string(), "cash");
    assert_eq!(PaymentMethod::Card.to_string(), "card");
}

#[test]
fn column_order_is_fixed() {
    assert_eq!(
        CSV_COLUMNS,
        ["productName", "price", "quantity", "paymentMethod"]
    );
}

#[test]
fn sale_row_serializes_payment_as_free_text() {
    let row = SaleRow::new("coffee", 1000, 2, "현금");
    let json = serde_json::to_string(&row).unwrap();
    let back: SaleRow = serde_json::from_str(&json).unwrap();
    assert_eq!(back, row);
}
