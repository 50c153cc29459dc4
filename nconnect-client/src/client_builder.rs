//! Client builder for timeout and header configuration
//!
//! # Examples
//!
//! ```rust,no_run
//! use nconnect_client::{ClientBuilder, StaticHeaders};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # fn example() -> nconnect_core::Result<()> {
//! let client = ClientBuilder::new("http://192.168.0.1:8000")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_header_provider(Arc::new(StaticHeaders::new(vec![])))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::headers::HeaderProvider;
use crate::RpcClient;
use nconnect_core::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Per-call request timeout the console uses.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Builder for configuring and creating an [`RpcClient`].
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    header_provider: Option<Arc<dyn HeaderProvider>>,
}

impl ClientBuilder {
    /// Create a builder for the device at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            header_provider: None,
        }
    }

    /// Override the per-call timeout (default 10 s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attach a header provider resolved before each call.
    ///
    /// Without one, calls are sent with no extra headers.
    pub fn with_header_provider(mut self, provider: Arc<dyn HeaderProvider>) -> Self {
        self.header_provider = Some(provider);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<RpcClient> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        // Endpoint paths start with '/', so the base must not end with one
        let base_url = self.base_url.trim_end_matches('/').to_string();

        Ok(RpcClient {
            http,
            base_url,
            header_provider: self.header_provider,
        })
    }
}
