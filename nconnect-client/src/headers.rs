//! Asynchronously-resolved request headers for admin calls
//!
//! The device's web console receives its admin headers from a deferred
//! value owned by the hosting page. Here that ambient dependency is an
//! explicit provider passed into the client at construction: the client asks
//! it for a name-to-value mapping before each call. No provider means no
//! extra headers, not an error.
//!
//! Resolution failure is fail-open: the call is logged and proceeds without
//! headers rather than aborting. See DESIGN.md for why this behavior is
//! preserved as-is.

use futures::future::BoxFuture;

/// Error type a provider may fail with.
pub type HeaderError = Box<dyn std::error::Error + Send + Sync>;

/// Header name → value pairs to attach to a request.
pub type Headers = Vec<(String, String)>;

/// Source of per-call request headers.
///
/// Object-safe so the client can hold `Arc<dyn HeaderProvider>`; async via
/// `BoxFuture` because resolution may itself wait on I/O (e.g. a token
/// exchange finishing).
pub trait HeaderProvider: Send + Sync {
    /// Resolve the headers to send with the next request.
    fn resolve(&self) -> BoxFuture<'_, Result<Headers, HeaderError>>;
}

/// A fixed set of headers, resolved immediately.
///
/// # Examples
///
/// ```rust
/// use nconnect_client::StaticHeaders;
///
/// let headers = StaticHeaders::new(vec![
///     ("Authorization".to_string(), "Bearer abc".to_string()),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct StaticHeaders {
    headers: Headers,
}

impl StaticHeaders {
    pub fn new(headers: Headers) -> Self {
        Self { headers }
    }
}

impl HeaderProvider for StaticHeaders {
    fn resolve(&self) -> BoxFuture<'_, Result<Headers, HeaderError>> {
        Box::pin(async move { Ok(self.headers.clone()) })
    }
}
