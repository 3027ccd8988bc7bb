// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List command: all rows plus both aggregates

use super::unexpected;
use crate::client::DaemonClient;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use till_core::aggregate::{PaymentTotal, ProductTotal};
use till_core::row::SaleRow;
use till_daemon::protocol::{Request, Response};

#[derive(Serialize)]
struct Listing {
    rows: Vec<SaleRow>,
    by_product: Vec<ProductTotal>,
    by_payment: Vec<PaymentTotal>,
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} sale(s)", self.rows.len())?;
        for row in &self.rows {
            writeln!(
                f,
                "  {}  x{}  @{}  [{}]",
                row.product, row.quantity, row.price, row.payment
            )?;
        }
        writeln!(f, "By product:")?;
        for total in &self.by_product {
            writeln!(
                f,
                "  {}  qty={}  price={}",
                total.product, total.quantity, total.price
            )?;
        }
        writeln!(f, "By payment:")?;
        for total in &self.by_payment {
            writeln!(f, "  {}  qty={}", total.payment, total.quantity)?;
        }
        Ok(())
    }
}

pub async fn handle(client: &DaemonClient, format: OutputFormat) -> Result<()> {
    match client.request(Request::List).await? {
        Response::Listing {
            rows,
            by_product,
            by_payment,
        } => {
            output::print(
                &Listing {
                    rows,
                    by_product,
                    by_payment,
                },
                format,
            );
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}
