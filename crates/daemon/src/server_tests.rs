// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn valid_input_truncates_numbers_and_trims_product() {
    let row = validate_record("  coffee  ", 1000.9, 2.7, "cash").unwrap();
    assert_eq!(row.product, "coffee");
    assert_eq!(row.price, 1000);
    assert_eq!(row.quantity, 2);
    assert_eq!(row.payment, "cash");
}

#[test]
fn payment_token_is_canonicalized() {
    let row = validate_record("coffee", 1000.0, 1.0, " CARD ").unwrap();
    assert_eq!(row.payment, "card");
}

#[test]
fn empty_product_is_rejected() {
    assert!(validate_record("   ", 1000.0, 1.0, "cash").is_err());
}

#[test]
fn non_finite_numbers_are_rejected() {
    assert!(validate_record("coffee", f64::NAN, 1.0, "cash").is_err());
    assert!(validate_record("coffee", 1000.0, f64::INFINITY, "cash").is_err());
}

#[test]
fn unknown_payment_is_rejected_with_the_offending_token() {
    let err = validate_record("coffee", 1000.0, 1.0, "check").unwrap_err();
    assert!(err.contains("check"));
}
