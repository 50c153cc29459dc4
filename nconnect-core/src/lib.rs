//! Core wire types and protocol rules for the nConnect device RPC
//!
//! This crate holds the transport-agnostic half of the client: the JSON-RPC
//! 2.0 envelopes the device speaks, the default-parameter merge rule, the
//! error taxonomy, and the address formatting helpers the console uses.
//! The `nconnect-client` crate builds the HTTP transport and the typed
//! operation surface on top of this foundation.
//!
//! # Wire protocol
//!
//! One HTTP POST per call, body `{id, jsonrpc, method, params}` with a
//! constant id, response `{result}` or `{error}`. The error value's shape is
//! up to the device and is passed through to callers verbatim.
//!
//! # Example
//!
//! ```rust
//! use nconnect_core::{RpcRequest, RpcResponse};
//! use nconnect_core::params::merge_params;
//!
//! let params = merge_params(None, None);
//! let request = RpcRequest::new("getAddrs", params);
//! assert_eq!(request.method, "getAddrs");
//!
//! let response: RpcResponse = serde_json::from_str(r#"{"result": "ok"}"#).unwrap();
//! assert_eq!(response.into_result().unwrap(), "ok");
//! ```

pub mod addr;
pub mod error;
pub mod params;
pub mod types;

// Re-export the most commonly used items so callers can write
// `nconnect_core::Error` instead of `nconnect_core::error::Error`
pub use error::{Error, Result};
pub use params::{merge_params, Params};
pub use types::{RpcRequest, RpcResponse, CLIENT_ID, JSONRPC_VERSION};
