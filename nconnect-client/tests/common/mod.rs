//! Common test utilities for nconnect-client integration tests
//!
//! Provides a mock nConnect device: an HTTP server answering the RPC
//! endpoints from a handler function, recording every request it receives
//! so tests can assert on the exact wire bodies and headers.

#![allow(dead_code)]

use futures::future::BoxFuture;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use warp::Filter;

type Handler = Arc<dyn Fn(String, Value) -> BoxFuture<'static, Value> + Send + Sync>;

/// One request as seen by the mock device.
pub struct RecordedRequest {
    /// Path, e.g. `/rpc/admin`
    pub endpoint: String,
    /// Header name/value pairs (names lowercased by the server)
    pub headers: Vec<(String, String)>,
    /// Decoded JSON body
    pub body: Value,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Mock device server for client testing.
pub struct MockDeviceServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    request_rx: mpsc::UnboundedReceiver<RecordedRequest>,
}

impl MockDeviceServer {
    /// Start a mock device whose responses come from an async handler.
    ///
    /// The handler receives the request path and decoded body, and returns
    /// the JSON body to reply with. Plain GETs (static files) reach the
    /// handler with a `Null` body.
    pub async fn with_handler<F, Fut>(handler: F) -> Self
    where
        F: Fn(String, Value) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Value> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |endpoint, body| Box::pin(handler(endpoint, body)));
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let rpc_handler = handler.clone();
        let rpc = warp::post()
            .and(warp::path("rpc"))
            .and(warp::path::param::<String>())
            .and(warp::path::end())
            .and(warp::header::headers_cloned())
            .and(warp::body::json())
            .and_then(
                move |segment: String, headers: warp::http::HeaderMap, body: Value| {
                    let handler = rpc_handler.clone();
                    let tx = request_tx.clone();
                    async move {
                        let endpoint = format!("/rpc/{}", segment);
                        let _ = tx.send(RecordedRequest {
                            endpoint: endpoint.clone(),
                            headers: headers
                                .iter()
                                .map(|(name, value)| {
                                    (
                                        name.as_str().to_string(),
                                        value.to_str().unwrap_or("").to_string(),
                                    )
                                })
                                .collect(),
                            body: body.clone(),
                        });
                        let response = handler(endpoint, body).await;
                        Ok::<_, warp::Rejection>(warp::reply::json(&response))
                    }
                },
            );

        let static_handler = handler.clone();
        let static_files = warp::get().and(warp::path::full()).and_then(
            move |path: warp::path::FullPath| {
                let handler = static_handler.clone();
                async move {
                    let response = handler(path.as_str().to_string(), Value::Null).await;
                    Ok::<_, warp::Rejection>(warp::reply::json(&response))
                }
            },
        );

        let (addr, server) = warp::serve(rpc.or(static_files)).bind_with_graceful_shutdown(
            ([127, 0, 0, 1], 0),
            async move {
                let _ = shutdown_rx.await;
            },
        );
        tokio::spawn(server);

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            request_rx,
        }
    }

    /// Start a mock device with a synchronous handler.
    pub async fn respond<F>(handler: F) -> Self
    where
        F: Fn(String, Value) -> Value + Send + Sync + 'static,
    {
        Self::with_handler(move |endpoint, body| {
            let response = handler(endpoint, body);
            async move { response }
        })
        .await
    }

    /// Base URL for pointing a client at this mock.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Next request the mock received, in arrival order.
    pub async fn next_request(&mut self) -> Option<RecordedRequest> {
        tokio::time::timeout(std::time::Duration::from_secs(5), self.request_rx.recv())
            .await
            .ok()
            .flatten()
    }

    /// Shut the mock down.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Wrap a result value in a success response body.
pub fn rpc_result(result: Value) -> Value {
    serde_json::json!({ "result": result })
}

/// Wrap an error value in a failure response body.
pub fn rpc_error(error: Value) -> Value {
    serde_json::json!({ "error": error })
}
