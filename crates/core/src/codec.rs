// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Row codec: converts between sale rows and the delimited artifact text.
//!
//! Decoding is best-effort: malformed records are logged and skipped so
//! one corrupt line never loses the rest of the ledger. Encoding uses
//! standard CSV quoting so product names containing the delimiter, the
//! quote character, or newlines round-trip exactly.

use crate::row::{SaleRow, COL_PAYMENT, COL_PRICE, COL_PRODUCT, COL_QUANTITY, CSV_COLUMNS};
use std::io;
use thiserror::Error;
use tracing::warn;

/// Byte-order marker prefixed once when a brand-new artifact is created.
/// The codec itself never emits it.
pub const BOM: char = '\u{feff}';

/// UTF-8 encoding of [`BOM`].
pub const BOM_BYTES: &[u8] = "\u{feff}".as_bytes();

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("encoded document was not valid utf-8")]
    NotUtf8,
}

/// Positions of the fixed columns within a decoded header row.
/// Missing columns zero-fill their field on every record.
struct ColumnMap {
    product: Option<usize>,
    price: Option<usize>,
    quantity: Option<usize>,
    payment: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            product: find(COL_PRODUCT),
            price: find(COL_PRICE),
            quantity: find(COL_QUANTITY),
            payment: find(COL_PAYMENT),
        }
    }
}

/// Parse delimited text into sale rows.
///
/// The header row maps columns by name, order-independent. A leading
/// byte-order marker is stripped, blank lines are skipped, and records
/// that fail to parse are logged and dropped rather than aborting the
/// remainder.
pub fn decode(text: &str) -> Vec<SaleRow> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => ColumnMap::from_headers(headers),
        Err(err) => {
            warn!("unreadable ledger header, returning no rows: {}", err);
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => rows.push(row_from_record(&record, &columns)),
            Err(err) => warn!("skipping malformed ledger record: {}", err),
        }
    }
    rows
}

fn row_from_record(record: &csv::StringRecord, columns: &ColumnMap) -> SaleRow {
    let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");
    SaleRow {
        product: field(columns.product).trim().to_string(),
        price: numeric(field(columns.price)),
        quantity: numeric(field(columns.quantity)),
        payment: field(columns.payment).trim().to_string(),
    }
}

/// Missing or unparseable numeric fields decode as 0; fractional values
/// truncate toward zero, matching the input boundary.
fn numeric(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(whole) = raw.parse::<i64>() {
        return whole;
    }
    raw.parse::<f64>().map(|f| f.trunc() as i64).unwrap_or(0)
}

/// Serialize rows in the fixed column order, one line per row with a
/// trailing newline. Emits the header line first iff `include_header`.
pub fn encode(rows: &[SaleRow], include_header: bool) -> Result<String, CodecError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        if include_header {
            writer.write_record(CSV_COLUMNS)?;
        }
        for row in rows {
            writer.write_record([
                row.product.as_str(),
                row.price.to_string().as_str(),
                row.quantity.to_string().as_str(),
                row.payment.as_str(),
            ])?;
        }
        writer.flush()?;
    }
    String::from_utf8(buf).map_err(|_| CodecError::NotUtf8)
}

/// Header-only document used for synthetic empty artifacts.
pub fn empty_document() -> String {
    let mut doc = CSV_COLUMNS.join(",");
    doc.push('\n');
    doc
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
