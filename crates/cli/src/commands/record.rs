// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record command: append one sale to the ledger

use super::unexpected;
use crate::client::DaemonClient;
use anyhow::Result;
use till_daemon::protocol::{Request, Response};

#[derive(clap::Args)]
pub struct RecordArgs {
    /// Product name
    pub product: String,

    /// Unit price in whole currency units (fractions are truncated)
    pub price: f64,

    /// Quantity sold (fractions are truncated)
    pub quantity: f64,

    /// Payment method
    #[arg(long, value_parser = ["cash", "card"])]
    pub payment: String,
}

pub async fn handle(client: &DaemonClient, args: RecordArgs) -> Result<()> {
    let request = Request::Record {
        product: args.product.clone(),
        price: args.price,
        quantity: args.quantity,
        payment: args.payment,
    };
    match client.request(request).await? {
        Response::Recorded => {
            println!("Recorded: {} x{}", args.product.trim(), args.quantity.trunc());
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}
