//! JSON-RPC 2.0 over HTTP client for the nConnect device
//!
//! This crate is the transport half of the client SDK: a generic
//! [`RpcClient`] that posts JSON-RPC envelopes with a bounded timeout, the
//! enumerated method tables for the device's two endpoints, and the typed
//! [`AdminClient`] / [`NetworkClient`] wrappers the console is built from.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use nconnect_client::{AdminClient, RpcClient};
//!
//! #[tokio::main]
//! async fn main() -> nconnect_core::Result<()> {
//!     let rpc = RpcClient::new("http://192.168.0.1:8000")?;
//!     let admin = AdminClient::new(rpc);
//!
//!     let addrs = admin.get_addrs().await?;
//!     println!("accepting: {:?}", addrs.accept_addrs);
//!
//!     // Keep the pairing QR payload fresh while the console is open
//!     let mut tokens = admin.watch_admin_token(nconnect_client::TOKEN_ROTATE_INTERVAL);
//!     tokens.changed().await.ok();
//!     println!("token: {:?}", *tokens.borrow());
//!     Ok(())
//! }
//! ```
//!
//! # With admin headers
//!
//! ```rust,no_run
//! use nconnect_client::{ClientBuilder, StaticHeaders};
//! use std::sync::Arc;
//!
//! # fn example() -> nconnect_core::Result<()> {
//! let rpc = ClientBuilder::new("http://192.168.0.1:8000")
//!     .with_header_provider(Arc::new(StaticHeaders::new(vec![
//!         ("Authorization".to_string(), "Bearer t".to_string()),
//!     ])))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod admin;
mod client;
mod client_builder;
mod headers;
mod method;
mod network;

pub use admin::{
    AdminClient, AdminToken, Addrs, DeviceInfo, LocalIp, Token, TunaConfig, TOKEN_EXPIRATION,
    TOKEN_ROTATE_INTERVAL,
};
pub use client::RpcClient;
pub use client_builder::{ClientBuilder, DEFAULT_TIMEOUT};
pub use headers::{HeaderError, HeaderProvider, Headers, StaticHeaders};
pub use method::{AdminMethod, NetworkMethod, RpcMethod, ADMIN_ENDPOINT, NETWORK_ENDPOINT};
pub use network::{
    MemberInfo, NetworkClient, NetworkData, NetworkInfo, NetworkSettings, NetworkState,
};
