// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire protocol between clients and the daemon.
//!
//! Messages are JSON documents framed by a 4-byte big-endian length
//! prefix. Reads and writes are bounded by a timeout so neither side
//! blocks indefinitely on a stalled peer.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io;
use std::time::Duration;
use thiserror::Error;
use till_core::aggregate::{PaymentTotal, ProductTotal};
use till_core::row::SaleRow;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Protocol version, sent in the Hello exchange.
pub const PROTOCOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for a single read or write.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on a framed message; large enough for any plausible
/// exported ledger, small enough to reject garbage frames.
pub const MAX_MESSAGE_SIZE: u32 = 16 * 1024 * 1024;

/// Errors from protocol operations
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("operation timed out")]
    Timeout,
    #[error("connection closed")]
    ConnectionClosed,
    #[error("message too large: {0} bytes")]
    MessageTooLarge(usize),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Client request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Liveness check
    Ping,
    /// Version exchange
    Hello { version: String },
    /// Full ledger plus both aggregates
    List,
    /// Record one sale; numbers are truncated to whole units after
    /// validation
    Record {
        product: String,
        price: f64,
        quantity: f64,
        payment: String,
    },
    /// Destroy all rows
    ResetAll,
    /// Raw artifact bytes for download
    Export,
    /// Artifact size without a body
    Probe,
    /// Stop the daemon
    Shutdown,
}

/// Daemon response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Pong,
    Hello {
        version: String,
    },
    Listing {
        rows: Vec<SaleRow>,
        by_product: Vec<ProductTotal>,
        by_payment: Vec<PaymentTotal>,
    },
    Recorded,
    ResetDone,
    Export {
        filename: String,
        content_type: String,
        cache_control: String,
        #[serde(with = "b64")]
        bytes: Vec<u8>,
    },
    Probe {
        size: u64,
    },
    ShuttingDown,
    /// Client input failed validation; the ledger was not touched
    Invalid {
        message: String,
    },
    /// Server-side failure
    Error {
        message: String,
    },
}

/// Artifact bytes travel as base64 text. A raw JSON byte array spends
/// several digits per byte and large exports would hit
/// [`MAX_MESSAGE_SIZE`] long before the artifact itself does.
mod b64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        STANDARD.encode(bytes).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD.decode(text).map_err(serde::de::Error::custom)
    }
}

/// Encode a message as raw JSON (no length prefix)
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, ProtocolError> {
    Ok(serde_json::to_vec(value)?)
}

/// Decode a message from raw JSON
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ProtocolError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Write a length-prefixed message
pub async fn write_message<W: AsyncWrite + Unpin>(
    writer: &mut W,
    payload: &[u8],
) -> Result<(), ProtocolError> {
    let len = u32::try_from(payload.len())
        .map_err(|_| ProtocolError::MessageTooLarge(payload.len()))?;
    if len > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge(payload.len()));
    }
    writer.write_all(&len.to_be_bytes()).await?;
    writer.write_all(payload).await?;
    writer.flush().await?;
    Ok(())
}

/// Read a length-prefixed message
pub async fn read_message<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Vec<u8>, ProtocolError> {
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            return Err(ProtocolError::ConnectionClosed)
        }
        Err(e) => return Err(e.into()),
    }
    let len = u32::from_be_bytes(len_buf);
    if len > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge(len as usize));
    }
    let mut payload = vec![0u8; len as usize];
    match reader.read_exact(&mut payload).await {
        Ok(_) => Ok(payload),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            Err(ProtocolError::ConnectionClosed)
        }
        Err(e) => Err(e.into()),
    }
}

/// Read a request with a timeout
pub async fn read_request<R: AsyncRead + Unpin>(
    reader: &mut R,
    timeout: Duration,
) -> Result<Request, ProtocolError> {
    match tokio::time::timeout(timeout, read_message(reader)).await {
        Ok(result) => decode(&result?),
        Err(_) => Err(ProtocolError::Timeout),
    }
}

/// Write a response with a timeout
pub async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &Response,
    timeout: Duration,
) -> Result<(), ProtocolError> {
    let payload = encode(response)?;
    match tokio::time::timeout(timeout, write_message(writer, &payload)).await {
        Ok(result) => result,
        Err(_) => Err(ProtocolError::Timeout),
    }
}

/// Write a request with a timeout (client side)
pub async fn write_request<W: AsyncWrite + Unpin>(
    writer: &mut W,
    request: &Request,
    timeout: Duration,
) -> Result<(), ProtocolError> {
    let payload = encode(request)?;
    match tokio::time::timeout(timeout, write_message(writer, &payload)).await {
        Ok(result) => result,
        Err(_) => Err(ProtocolError::Timeout),
    }
}

/// Read a response with a timeout (client side)
pub async fn read_response<R: AsyncRead + Unpin>(
    reader: &mut R,
    timeout: Duration,
) -> Result<Response, ProtocolError> {
    match tokio::time::timeout(timeout, read_message(reader)).await {
        Ok(result) => decode(&result?),
        Err(_) => Err(ProtocolError::Timeout),
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
