//! JSON-RPC client over HTTP POST
//!
//! One [`RpcClient`] serves both device endpoints: every call merges its
//! parameters, builds a fresh request envelope, and issues a single POST
//! with a bounded timeout. There is no session state, no retry, and no
//! ordering between in-flight calls. Callers may fire any number of them
//! concurrently.
//!
//! # Cloning
//!
//! `RpcClient` is cheaply cloneable; clones share the underlying connection
//! pool and header provider. This is how the typed wrappers and the token
//! watcher task hold it.

use crate::headers::HeaderProvider;
use crate::method::RpcMethod;
use nconnect_core::{merge_params, Error, Params, Result, RpcRequest, RpcResponse};
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;
use std::sync::Arc;

/// JSON-RPC 2.0 client for the nConnect device.
#[derive(Clone)]
pub struct RpcClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) header_provider: Option<Arc<dyn HeaderProvider>>,
}

impl RpcClient {
    /// Start building a client for the device at `base_url`.
    pub fn builder(base_url: impl Into<String>) -> crate::ClientBuilder {
        crate::ClientBuilder::new(base_url)
    }

    /// Create a client with the default timeout and no header provider.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    /// Base URL the client was built with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invoke one RPC operation and return the raw result value.
    ///
    /// Parameters are merged over the method's defaults: the caller's map
    /// only overrides keys it defines, and no key outside the union of both
    /// maps is ever sent. The request envelope is built fresh; nothing is
    /// retained across calls.
    ///
    /// # Errors
    ///
    /// [`Error::Rpc`] when the device rejects the call (its error value
    /// passed through verbatim), [`Error::Timeout`] / [`Error::Transport`]
    /// for network-level failures, and [`Error::MalformedResponse`] when the
    /// body carries neither `result` nor `error`. No failure is retried.
    #[tracing::instrument(skip(self, method, params), fields(method = method.wire_name()))]
    pub async fn invoke<M: RpcMethod>(&self, method: &M, params: Option<Params>) -> Result<Value> {
        let merged = merge_params(method.default_params().as_ref(), params.as_ref());
        let request = RpcRequest::new(method.wire_name(), merged);
        let url = format!("{}{}", self.base_url, method.endpoint());

        let mut builder = self.http.post(&url).json(&request);
        if let Some(provider) = &self.header_provider {
            match provider.resolve().await {
                Ok(headers) => {
                    for (name, value) in headers {
                        match (
                            HeaderName::from_bytes(name.as_bytes()),
                            HeaderValue::from_str(&value),
                        ) {
                            (Ok(name), Ok(value)) => builder = builder.header(name, value),
                            _ => tracing::warn!(header = %name, "skipping invalid rpc header"),
                        }
                    }
                }
                // Fail-open: the call goes out without headers
                Err(e) => tracing::warn!(error = %e, "rpc header resolution failed"),
            }
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("unexpected status {status}")));
        }

        let body: RpcResponse = response.json().await.map_err(transport_error)?;
        let result = body.into_result();
        if let Err(e) = &result {
            tracing::debug!(error = %e, "rpc call failed");
        }
        result
    }

    /// Invoke an operation and deserialize its result.
    pub async fn invoke_typed<M, R>(&self, method: &M, params: Option<Params>) -> Result<R>
    where
        M: RpcMethod,
        R: serde::de::DeserializeOwned,
    {
        let value = self.invoke(method, params).await?;
        serde_json::from_value(value).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Fetch a static JSON file from the device's web root by plain GET.
    ///
    /// Used for the tunneling-region choice list; the payload's shape is
    /// owned by whoever publishes the file, so it comes back as a raw
    /// [`Value`].
    pub async fn get_static(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("unexpected status {status}")));
        }
        response.json().await.map_err(transport_error)
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        Error::Transport(e.to_string())
    }
}
