// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sale row domain types and the fixed artifact column set.

use serde::{Deserialize, Serialize};

/// Column labels of the persisted artifact. The four-column order is
/// part of the on-disk format and must never change without a migration.
pub const COL_PRODUCT: &str = "productName";
pub const COL_PRICE: &str = "price";
pub const COL_QUANTITY: &str = "quantity";
pub const COL_PAYMENT: &str = "paymentMethod";

/// Fixed column order for encoding.
pub const CSV_COLUMNS: [&str; 4] = [COL_PRODUCT, COL_PRICE, COL_QUANTITY, COL_PAYMENT];

/// One recorded sale transaction.
///
/// `payment` is stored as free text so historical values outside the
/// current [`PaymentMethod`] enumeration still round-trip and group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRow {
    pub product: String,
    pub price: i64,
    pub quantity: i64,
    pub payment: String,
}

impl SaleRow {
    pub fn new(
        product: impl Into<String>,
        price: i64,
        quantity: i64,
        payment: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            price,
            quantity,
            payment: payment.into(),
        }
    }
}

/// Closed payment-method enumeration, enforced only at the validation
/// boundary (new records), never against already-persisted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    /// Canonical stored token.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
        }
    }

    /// Parse a boundary input token (ASCII-case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("cash") {
            Some(PaymentMethod::Cash)
        } else if input.eq_ignore_ascii_case("card") {
            Some(PaymentMethod::Card)
        } else {
            None
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "row_tests.rs"]
mod tests;
