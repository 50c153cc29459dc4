//! Wire envelopes for the nConnect device RPC
//!
//! The device speaks JSON-RPC 2.0 over HTTP POST with one request and one
//! response per call. Both envelopes are constructed fresh per call and are
//! never retained, so these types are plain data with no identity beyond
//! their fields.
//!
//! # Request IDs
//!
//! Unlike a general JSON-RPC client, this protocol does not correlate
//! responses by id: HTTP already pairs each response with its request. Every
//! request therefore carries the same constant id, [`CLIENT_ID`], which the
//! device uses only to tell web-console traffic apart from companion-app
//! traffic.
//!
//! # Result vs error
//!
//! Exactly one of `result`/`error` is expected to be meaningful per call.
//! The unwrapping rule lives in [`RpcResponse::into_result`] and treats a
//! response with neither field as a protocol violation, never as a success
//! with a missing value.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Deserialize an optional field so an explicit `null` stays `Some(Null)`
/// rather than collapsing to `None`. A missing key still uses the field's
/// `default` of `None`.
fn some_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Request id sent with every call.
///
/// Part of the external contract; the device logs it verbatim.
pub const CLIENT_ID: &str = "nConnect-web";

/// JSON-RPC protocol version sent with every call.
pub const JSONRPC_VERSION: &str = "2.0";

/// A single JSON-RPC 2.0 request to the device.
///
/// `params` is always present as an object (possibly empty); the device's
/// binding layer expects a map, not an array and not an absent field.
///
/// # Examples
///
/// ```rust
/// use nconnect_core::{RpcRequest, CLIENT_ID};
///
/// let req = RpcRequest::new("getAddrs", Default::default());
/// assert_eq!(req.id, CLIENT_ID);
/// assert_eq!(req.jsonrpc, "2.0");
/// assert_eq!(req.method, "getAddrs");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Constant client identifier, see [`CLIENT_ID`]
    pub id: String,
    /// Always "2.0"
    pub jsonrpc: String,
    /// Wire method name (part of the external contract)
    pub method: String,
    /// Merged call parameters
    pub params: Map<String, Value>,
}

impl RpcRequest {
    /// Build a request envelope for one call.
    ///
    /// The id and protocol version are filled in; callers only supply the
    /// wire method name and the already-merged parameter map.
    pub fn new(method: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            id: CLIENT_ID.to_string(),
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }
}

/// A single JSON-RPC response from the device.
///
/// The `error` field is kept as a raw [`Value`]: the device sends plain
/// strings for most failures and `{code, message}` objects for others, and
/// callers receive whatever was sent, verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Call result; present on success. `null` is a valid present result.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "some_value"
    )]
    pub result: Option<Value>,
    /// Server-reported error, arbitrary shape, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl RpcResponse {
    /// Unwrap the response into the call's outcome.
    ///
    /// A truthy `error` fails the call with that value. Otherwise a present
    /// `result` succeeds, including falsy values like `0`, `false`, `""`,
    /// and `null`. A response with neither is malformed.
    ///
    /// Truthiness follows the wire convention the device's own console uses:
    /// `null`, `false`, `0`, and `""` do not count as an error being
    /// reported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nconnect_core::RpcResponse;
    /// use serde_json::json;
    ///
    /// let ok: RpcResponse = serde_json::from_str(r#"{"result": 0}"#).unwrap();
    /// assert_eq!(ok.into_result().unwrap(), json!(0));
    ///
    /// let bad: RpcResponse = serde_json::from_str("{}").unwrap();
    /// assert!(bad.into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<Value> {
        if let Some(error) = self.error {
            if is_truthy(&error) {
                return Err(Error::Rpc(error));
            }
        }
        match self.result {
            Some(result) => Ok(result),
            None => Err(Error::MalformedResponse),
        }
    }

    /// True if the response carries a truthy error value.
    pub fn is_error(&self) -> bool {
        self.error.as_ref().map(is_truthy).unwrap_or(false)
    }
}

/// JS-style truthiness for JSON values.
///
/// Empty objects and arrays are truthy, matching the console's behavior of
/// surfacing `{}` errors to the operator.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_envelope_fields() {
        let req = RpcRequest::new("getInfo", Map::new());
        let encoded = serde_json::to_string(&req).unwrap();
        assert!(encoded.contains("\"id\":\"nConnect-web\""));
        assert!(encoded.contains("\"jsonrpc\":\"2.0\""));
        assert!(encoded.contains("\"method\":\"getInfo\""));
        assert!(encoded.contains("\"params\":{}"));
    }

    #[test]
    fn falsy_result_is_success() {
        let resp: RpcResponse = serde_json::from_str(r#"{"result": 0}"#).unwrap();
        assert_eq!(resp.into_result().unwrap(), json!(0));

        let resp: RpcResponse = serde_json::from_str(r#"{"result": ""}"#).unwrap();
        assert_eq!(resp.into_result().unwrap(), json!(""));

        let resp: RpcResponse = serde_json::from_str(r#"{"result": null}"#).unwrap();
        assert_eq!(resp.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn error_passes_through_verbatim() {
        let resp: RpcResponse =
            serde_json::from_str(r#"{"error": {"code": 1, "message": "x"}}"#).unwrap();
        match resp.into_result() {
            Err(Error::Rpc(value)) => assert_eq!(value, json!({"code": 1, "message": "x"})),
            other => panic!("expected rpc error, got {:?}", other),
        }
    }

    #[test]
    fn string_error_passes_through() {
        // The device reports most failures as bare strings
        let resp: RpcResponse =
            serde_json::from_str(r#"{"error": "permission denied"}"#).unwrap();
        match resp.into_result() {
            Err(Error::Rpc(value)) => assert_eq!(value, json!("permission denied")),
            other => panic!("expected rpc error, got {:?}", other),
        }
    }

    #[test]
    fn neither_field_is_malformed() {
        let resp: RpcResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(resp.into_result(), Err(Error::MalformedResponse)));
    }

    #[test]
    fn falsy_error_does_not_fail_a_present_result() {
        let resp: RpcResponse =
            serde_json::from_str(r#"{"result": "ok", "error": ""}"#).unwrap();
        assert_eq!(resp.into_result().unwrap(), json!("ok"));
    }

    #[test]
    fn falsy_error_without_result_is_malformed() {
        let resp: RpcResponse = serde_json::from_str(r#"{"error": null}"#).unwrap();
        assert!(matches!(resp.into_result(), Err(Error::MalformedResponse)));
    }

    #[test]
    fn error_wins_over_result() {
        let resp: RpcResponse =
            serde_json::from_str(r#"{"result": "ok", "error": "boom"}"#).unwrap();
        assert!(resp.is_error());
        assert!(matches!(resp.into_result(), Err(Error::Rpc(_))));
    }
}
