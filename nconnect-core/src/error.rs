//! Error types for nconnect
//!
//! One enum covers the three failure classes a call can surface:
//!
//! - **RPC error**: the device explicitly rejected the call. The error
//!   value is arbitrary in shape (string or object) and is carried verbatim;
//!   operators see exactly what the device sent.
//! - **Transport error**: timeout, connection failure, or a non-2xx status
//!   with no usable body. Never retried automatically.
//! - **Protocol violation**: a 2xx body with neither `result` nor `error`.
//!
//! All of these are non-fatal to callers: a failed call leaves the client
//! fully usable for the next one.

use serde_json::Value;
use thiserror::Error;

/// Result type for nconnect operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single RPC call.
#[derive(Debug, Error)]
pub enum Error {
    /// Server-reported RPC error, passed through verbatim
    ///
    /// The device sends plain strings for most failures ("permission
    /// denied", "unknown method") and structured objects for others. No
    /// wrapping or reinterpretation happens on the way up.
    #[error("rpc error: {0}")]
    Rpc(Value),

    /// The per-call transport deadline (10 s by default) elapsed
    #[error("request timeout")]
    Timeout,

    /// Network-level failure: connection refused, DNS, non-2xx status,
    /// unreadable body
    #[error("transport error: {0}")]
    Transport(String),

    /// The decoded body had neither a `result` nor a truthy `error`
    #[error("rpc response contains no result or error field")]
    MalformedResponse,

    /// Request encode or result decode mismatch
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// The raw server error value, if this is an RPC-level failure.
    pub fn as_rpc(&self) -> Option<&Value> {
        match self {
            Error::Rpc(value) => Some(value),
            _ => None,
        }
    }
}
