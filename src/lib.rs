//! nconnect: client SDK for the nConnect network-access device
//!
//! This is the convenience crate that re-exports the nconnect sub-crates.
//! Use it if you want a single dependency covering the wire types and the
//! HTTP client.
//!
//! # Architecture
//!
//! - **nconnect-core**: wire envelopes, parameter merging, error taxonomy,
//!   address helpers
//! - **nconnect-client**: HTTP transport, method tables, typed admin and
//!   network-manager surfaces
//!
//! # Quick start
//!
//! ```rust,no_run
//! use nconnect::{AdminClient, NetworkClient, RpcClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rpc = RpcClient::new("http://192.168.0.1:8000")?;
//!
//!     let admin = AdminClient::new(rpc.clone());
//!     println!("balance: {}", admin.get_balance().await?);
//!
//!     let network = NetworkClient::new(rpc);
//!     let state = network.get_network_config().await?;
//!     println!("manager: {}", state.manager_address);
//!     Ok(())
//! }
//! ```

// Re-export the sub-crates under stable module names
pub use nconnect_client as client;
pub use nconnect_core as core;

// Convenience re-exports of the most commonly used types
pub use nconnect_client::{AdminClient, ClientBuilder, NetworkClient, RpcClient};
pub use nconnect_core::{Error, Result};
