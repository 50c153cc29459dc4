//! Typed surface for the `/rpc/admin` endpoint
//!
//! Everything the device's admin console does goes through here: address
//! list management, status and balance queries, seed export/import, log
//! retrieval, tunnel configuration, and the rotating admin token that
//! companion apps scan as a QR code.
//!
//! Result types mirror the device's JSON field names exactly; those names
//! are the external contract, not this crate's choice.

use crate::method::AdminMethod;
use crate::RpcClient;
use nconnect_core::{Params, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tokio::sync::watch;

/// How often the device rotates the admin token.
pub const TOKEN_ROTATE_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// How long each admin token stays valid after issue.
pub const TOKEN_EXPIRATION: Duration = Duration::from_secs(10 * 60);

/// One rotating admin credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// 32-byte token, hex encoded
    pub token: String,
    /// Expiry as Unix seconds
    pub expires_at: i64,
}

/// Payload companion apps pair with: the device's client address plus the
/// current token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminToken {
    pub addr: String,
    pub token: Option<Token>,
}

/// Accepted peer and administrator address lists.
///
/// The device reports unset lists as `null`, which is distinct from an
/// empty list; both render as an empty text block in the console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addrs {
    #[serde(default)]
    pub accept_addrs: Option<Vec<String>>,
    #[serde(default)]
    pub admin_addrs: Option<Vec<String>>,
}

/// Local interface addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalIp {
    #[serde(default)]
    pub ipv4: Option<Vec<String>>,
}

/// Device status as reported by `getInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Device's NKN client address
    pub addr: String,
    #[serde(rename = "localIP", default)]
    pub local_ip: Option<LocalIp>,
    #[serde(default)]
    pub admin_http_api_disabled: bool,
    #[serde(default)]
    pub version: String,
    /// Whether the device tunnels through tuna
    #[serde(default)]
    pub tuna: bool,
    #[serde(default)]
    pub tuna_service_name: Option<String>,
    #[serde(default)]
    pub tuna_country: Option<Vec<String>>,
    /// Per-relay inbound prices, decimal strings
    #[serde(default)]
    pub in_price: Option<Vec<String>>,
    /// Per-relay outbound prices, decimal strings
    #[serde(default)]
    pub out_price: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Tunnel relay selection and filtering.
///
/// Flattened as the `setTunaConfig` params object, matching what the
/// device binds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TunaConfig {
    pub service_name: String,
    pub country: Vec<String>,
    pub allow_nkn_addr: Vec<String>,
    pub disallow_nkn_addr: Vec<String>,
    pub allow_ip: Vec<String>,
    pub disallow_ip: Vec<String>,
}

/// Client for the device admin endpoint.
#[derive(Clone)]
pub struct AdminClient {
    rpc: RpcClient,
}

impl AdminClient {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    /// The underlying RPC client.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Current rotating admin token, or `None` when the device has no admin
    /// address registered.
    pub async fn get_admin_token(&self) -> Result<Option<AdminToken>> {
        self.rpc.invoke_typed(&AdminMethod::GetAdminToken, None).await
    }

    /// Stored accept and admin address lists.
    pub async fn get_addrs(&self) -> Result<Addrs> {
        self.rpc.invoke_typed(&AdminMethod::GetAddrs, None).await
    }

    /// Replace address lists. A `None` list is left untouched on the device
    /// and contributes no key to the request params.
    pub async fn set_addrs(
        &self,
        accept_addrs: Option<Vec<String>>,
        admin_addrs: Option<Vec<String>>,
    ) -> Result<Addrs> {
        self.rpc
            .invoke_typed(
                &AdminMethod::SetAddrs,
                Some(addr_params(accept_addrs, admin_addrs)),
            )
            .await
    }

    /// Append to address lists; `None` lists are untouched.
    pub async fn add_addrs(
        &self,
        accept_addrs: Option<Vec<String>>,
        admin_addrs: Option<Vec<String>>,
    ) -> Result<Addrs> {
        self.rpc
            .invoke_typed(
                &AdminMethod::AddAddrs,
                Some(addr_params(accept_addrs, admin_addrs)),
            )
            .await
    }

    /// Remove from address lists; `None` lists are untouched.
    pub async fn remove_addrs(
        &self,
        accept_addrs: Option<Vec<String>>,
        admin_addrs: Option<Vec<String>>,
    ) -> Result<Addrs> {
        self.rpc
            .invoke_typed(
                &AdminMethod::RemoveAddrs,
                Some(addr_params(accept_addrs, admin_addrs)),
            )
            .await
    }

    /// IPv4 addresses of the device's non-loopback interfaces.
    pub async fn get_local_ip(&self) -> Result<LocalIp> {
        self.rpc.invoke_typed(&AdminMethod::GetLocalIp, None).await
    }

    /// Device status: address, version, tunnel state, pricing.
    pub async fn get_info(&self) -> Result<DeviceInfo> {
        self.rpc.invoke_typed(&AdminMethod::GetInfo, None).await
    }

    /// Wallet balance as a decimal string.
    pub async fn get_balance(&self) -> Result<String> {
        self.rpc.invoke_typed(&AdminMethod::GetBalance, None).await
    }

    /// Enable or disable the admin HTTP API; the device answers
    /// `"success"`. Disabling it locks out this very client on the next
    /// call.
    pub async fn set_admin_http_api(&self, disable: bool) -> Result<String> {
        let mut params = Params::new();
        params.insert("disable".to_string(), json!(disable));
        self.rpc
            .invoke_typed(&AdminMethod::SetAdminHttpApi, Some(params))
            .await
    }

    /// Export the account seed (hex). Handle with care.
    pub async fn get_seed(&self) -> Result<String> {
        self.rpc.invoke_typed(&AdminMethod::GetSeed, None).await
    }

    /// Import an account seed; the device answers `"success"`.
    pub async fn set_seed(&self, seed: &str) -> Result<String> {
        let mut params = Params::new();
        params.insert("seed".to_string(), json!(seed));
        self.rpc
            .invoke_typed(&AdminMethod::SetSeed, Some(params))
            .await
    }

    /// Tail of the device log, at most `max_size` bytes when given.
    pub async fn get_log(&self, max_size: Option<u64>) -> Result<String> {
        let mut params = Params::new();
        if let Some(max_size) = max_size {
            params.insert("maxSize".to_string(), json!(max_size));
        }
        self.rpc
            .invoke_typed(&AdminMethod::GetLog, Some(params))
            .await
    }

    /// Reconfigure the tunnel relay selection; the device answers
    /// `"success"` and rotates its sessions in the background.
    pub async fn set_tuna_config(&self, config: &TunaConfig) -> Result<String> {
        let params = match serde_json::to_value(config) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => Params::new(),
        };
        self.rpc
            .invoke_typed(&AdminMethod::SetTunaConfig, Some(params))
            .await
    }

    /// Poll the admin token on an interval, publishing each fresh value.
    ///
    /// The spawned task fetches immediately, then once per tick. A failed
    /// poll is logged and simply tried again next tick, with no retry policy or
    /// backoff, matching how the console refreshes its QR code. The task
    /// stops once every receiver is dropped.
    ///
    /// [`TOKEN_ROTATE_INTERVAL`] is the natural interval to pass.
    pub fn watch_admin_token(&self, interval: Duration) -> watch::Receiver<Option<AdminToken>> {
        let (tx, rx) = watch::channel(None);
        let client = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.is_closed() {
                    break;
                }
                match client.get_admin_token().await {
                    Ok(token) => {
                        if tx.send(token).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "admin token refresh failed"),
                }
            }
        });
        rx
    }
}

/// Build the `{acceptAddrs?, adminAddrs?}` params object. `None` lists are
/// omitted entirely; the device treats a missing key as "leave unchanged".
fn addr_params(accept_addrs: Option<Vec<String>>, admin_addrs: Option<Vec<String>>) -> Params {
    let mut params = Params::new();
    if let Some(accept) = accept_addrs {
        params.insert("acceptAddrs".to_string(), json!(accept));
    }
    if let Some(admin) = admin_addrs {
        params.insert("adminAddrs".to_string(), json!(admin));
    }
    params
}
