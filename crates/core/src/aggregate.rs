// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure aggregation over an already-loaded row sequence. No I/O;
//! aggregates are derived fresh from the full ledger on every read.

use crate::row::SaleRow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-product summary. `price` is frozen from the first row observed
/// for the product name; later rows with a different price do not
/// change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTotal {
    pub product: String,
    pub quantity: i64,
    pub price: i64,
}

/// Per-payment-method summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTotal {
    pub payment: String,
    pub quantity: i64,
}

/// Group rows by product name in first-seen order.
///
/// Grouping key equality is exact string equality: no trimming, no
/// case folding. Callers wanting normalized groups must trim first.
pub fn by_product(rows: &[SaleRow]) -> Vec<ProductTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<ProductTotal> = Vec::new();
    for row in rows {
        match index.get(row.product.as_str()) {
            Some(&at) => totals[at].quantity += row.quantity,
            None => {
                index.insert(row.product.as_str(), totals.len());
                totals.push(ProductTotal {
                    product: row.product.clone(),
                    quantity: row.quantity,
                    price: row.price,
                });
            }
        }
    }
    totals
}

/// Group rows by payment method in first-seen order, summing quantity.
pub fn by_payment(rows: &[SaleRow]) -> Vec<PaymentTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<PaymentTotal> = Vec::new();
    for row in rows {
        match index.get(row.payment.as_str()) {
            Some(&at) => totals[at].quantity += row.quantity,
            None => {
                index.insert(row.payment.as_str(), totals.len());
                totals.push(PaymentTotal {
                    payment: row.payment.clone(),
                    quantity: row.quantity,
                });
            }
        }
    }
    totals
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
