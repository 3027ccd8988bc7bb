// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Socket server and connection handling.

use thiserror::Error;
use tokio::net::UnixStream;
use tracing::{debug, error};

use crate::lifecycle::DaemonState;
use crate::protocol::{
    self, ProtocolError, Request, Response, DEFAULT_TIMEOUT, PROTOCOL_VERSION,
};
use till_core::aggregate::{by_payment, by_product};
use till_core::row::{PaymentMethod, SaleRow};
use till_storage::ARTIFACT_NAME;

/// Errors that can occur while serving a connection
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("request read timeout")]
    Timeout,
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Handle a single client connection
pub async fn handle_connection(
    daemon: &mut DaemonState,
    stream: UnixStream,
) -> Result<(), ServerError> {
    // Split stream for reading/writing
    let (mut reader, mut writer) = stream.into_split();

    // Read request with timeout
    let request = match protocol::read_request(&mut reader, DEFAULT_TIMEOUT).await {
        Ok(req) => req,
        Err(ProtocolError::Timeout) => {
            error!("Request read timeout");
            return Err(ServerError::Timeout);
        }
        Err(ProtocolError::ConnectionClosed) => {
            debug!("Client disconnected before sending request");
            return Ok(());
        }
        Err(e) => {
            error!("Failed to read request: {}", e);
            return Err(ServerError::Protocol(e));
        }
    };

    debug!("Received request: {:?}", request);

    // Handle request
    let response = handle_request(daemon, request);

    // Write response with timeout
    protocol::write_response(&mut writer, &response, DEFAULT_TIMEOUT)
        .await
        .map_err(ServerError::Protocol)?;

    Ok(())
}

/// Handle a single request and return a response
fn handle_request(daemon: &mut DaemonState, request: Request) -> Response {
    match request {
        Request::Ping => Response::Pong,

        Request::Hello { version: _ } => Response::Hello {
            version: PROTOCOL_VERSION.to_string(),
        },

        Request::List => match daemon.store.load_all() {
            Ok(rows) => {
                let by_product = by_product(&rows);
                let by_payment = by_payment(&rows);
                Response::Listing {
                    rows,
                    by_product,
                    by_payment,
                }
            }
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        },

        Request::Record {
            product,
            price,
            quantity,
            payment,
        } => match validate_record(&product, price, quantity, &payment) {
            Ok(row) => match daemon.store.append(&row) {
                Ok(()) => Response::Recorded,
                Err(e) => Response::Error {
                    message: e.to_string(),
                },
            },
            Err(message) => Response::Invalid { message },
        },

        Request::ResetAll => match daemon.store.reset() {
            Ok(()) => Response::ResetDone,
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        },

        Request::Export => match daemon.store.export_raw() {
            Ok(bytes) => Response::Export {
                filename: ARTIFACT_NAME.to_string(),
                content_type: "text/csv; charset=utf-8".to_string(),
                // The store is mutable; exports must never be cached
                cache_control: "no-store".to_string(),
                bytes,
            },
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        },

        Request::Probe => match daemon.store.artifact_len() {
            Ok(size) => Response::Probe { size },
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        },

        Request::Shutdown => {
            daemon.shutdown_requested = true;
            Response::ShuttingDown
        }
    }
}

/// Validate client input for a new sale. Validation failures never
/// reach storage.
pub(crate) fn validate_record(
    product: &str,
    price: f64,
    quantity: f64,
    payment: &str,
) -> Result<SaleRow, String> {
    let product = product.trim();
    if product.is_empty() {
        return Err("product must be a non-empty string".to_string());
    }
    if !price.is_finite() {
        return Err("price must be a finite number".to_string());
    }
    if !quantity.is_finite() {
        return Err("quantity must be a finite number".to_string());
    }
    let method = PaymentMethod::parse(payment)
        .ok_or_else(|| format!("payment must be one of cash, card (got {:?})", payment))?;

    Ok(SaleRow {
        product: product.to_string(),
        price: price.trunc() as i64,
        quantity: quantity.trunc() as i64,
        payment: method.as_str().to_string(),
    })
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
