//! Typed surface for the `/rpc/network` endpoint
//!
//! The network manager authorizes member devices into a private network,
//! assigns them addresses, and relays payments. Most mutating operations
//! answer the literal string `"success"`; the result types here mirror the
//! manager's JSON field names verbatim.

use crate::method::NetworkMethod;
use crate::RpcClient;
use chrono::{DateTime, Utc};
use nconnect_core::{Params, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// Network-wide settings shared with every member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub dns: String,
}

/// One node known to the manager, waiting or authorized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfo {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub name: String,
    /// Member's NKN client address
    pub address: String,
    /// Tunnel listen address of the member's server, when it runs one
    #[serde(default)]
    pub server_address: String,
    pub last_seen: DateTime<Utc>,
    #[serde(default)]
    pub server: bool,
    #[serde(default)]
    pub balance: String,
}

/// The manager's persisted network state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkData {
    #[serde(default)]
    pub network_info: Option<NetworkInfo>,
    #[serde(default)]
    pub ip_start: String,
    #[serde(default)]
    pub ip_end: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub next_ip: String,
    /// Nodes waiting for authorization, keyed by address
    #[serde(default)]
    pub waiting: Option<HashMap<String, MemberInfo>>,
    /// Authorized members, keyed by address
    #[serde(default)]
    pub member: Option<HashMap<String, MemberInfo>>,
    /// Addresses each member accepts, keyed by member address
    #[serde(default)]
    pub accept_address: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    pub name_to_address: Option<HashMap<String, String>>,
    #[serde(default)]
    pub manager_balance: String,
}

/// `getNetworkConfig` result: state plus the manager's own identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkState {
    #[serde(default)]
    pub network_data: Option<NetworkData>,
    #[serde(default)]
    pub manager_address: String,
    #[serde(default)]
    pub manager_balance: String,
}

/// Settings written by `setNetworkConfig`, flattened on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSettings {
    pub domain: String,
    pub ip_start: String,
    pub ip_end: String,
    pub netmask: String,
    pub gateway: String,
    pub dns: String,
}

/// Client for the network-manager endpoint.
#[derive(Clone)]
pub struct NetworkClient {
    rpc: RpcClient,
}

impl NetworkClient {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    /// The underlying RPC client.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Full network state: members, waiting nodes, address plan, balances.
    pub async fn get_network_config(&self) -> Result<NetworkState> {
        self.rpc
            .invoke_typed(&NetworkMethod::GetNetworkConfig, None)
            .await
    }

    /// Rewrite the network's address plan and shared settings.
    pub async fn set_network_config(&self, settings: &NetworkSettings) -> Result<String> {
        let params = match serde_json::to_value(settings) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => Params::new(),
        };
        self.rpc
            .invoke_typed(&NetworkMethod::SetNetworkConfig, Some(params))
            .await
    }

    /// Move a waiting node into the member list.
    pub async fn authorize_member(&self, address: &str) -> Result<String> {
        self.rpc
            .invoke_typed(&NetworkMethod::AuthorizeMember, Some(address_params(address)))
            .await
    }

    /// Demote a member back to the waiting list.
    pub async fn remove_member(&self, address: &str) -> Result<String> {
        self.rpc
            .invoke_typed(&NetworkMethod::RemoveMember, Some(address_params(address)))
            .await
    }

    /// Drop a node from the waiting list entirely.
    pub async fn delete_waiting(&self, address: &str) -> Result<String> {
        self.rpc
            .invoke_typed(&NetworkMethod::DeleteWaiting, Some(address_params(address)))
            .await
    }

    /// Set which addresses one member accepts connections from.
    ///
    /// The second key is `AcceptAddresses` with that exact casing, an
    /// inconsistency baked into the wire contract.
    pub async fn set_accept_address(
        &self,
        address: &str,
        accept_addresses: &[String],
    ) -> Result<String> {
        let mut params = Params::new();
        params.insert("address".to_string(), json!(address));
        params.insert("AcceptAddresses".to_string(), json!(accept_addresses));
        self.rpc
            .invoke_typed(&NetworkMethod::SetAcceptAddress, Some(params))
            .await
    }

    /// Transfer tokens from the manager's wallet; `amount` is a decimal
    /// string.
    pub async fn send_token(&self, address: &str, amount: &str) -> Result<String> {
        let mut params = Params::new();
        params.insert("address".to_string(), json!(address));
        params.insert("amount".to_string(), json!(amount));
        self.rpc
            .invoke_typed(&NetworkMethod::SendToken, Some(params))
            .await
    }

    /// Ping a member over NKN; the result string reports the RTT.
    pub async fn nkn_ping(&self, address: &str) -> Result<String> {
        self.rpc
            .invoke_typed(&NetworkMethod::NknPing, Some(address_params(address)))
            .await
    }
}

fn address_params(address: &str) -> Params {
    let mut params = Params::new();
    params.insert("address".to_string(), json!(address));
    params
}
