//! Method descriptors for the device's RPC endpoints
//!
//! The console's method table is static data: each entry names a wire
//! method, the endpoint path that serves it, and optionally a map of default
//! parameters. Here the table is two enums, one per endpoint, dispatched
//! through the single generic [`RpcClient::invoke`](crate::RpcClient::invoke)
//! entry point.
//!
//! Wire method names and endpoint paths are part of the device's external
//! contract and are never reinterpreted. Note `getLocalIP`, which does not
//! follow the camel-casing of its neighbors.

use nconnect_core::Params;

/// Admin endpoint path.
pub const ADMIN_ENDPOINT: &str = "/rpc/admin";

/// Network-manager endpoint path.
pub const NETWORK_ENDPOINT: &str = "/rpc/network";

/// A named RPC operation: wire method name, endpoint path, and optional
/// default parameters.
///
/// Implemented by [`AdminMethod`] and [`NetworkMethod`]; tests implement it
/// for ad-hoc descriptors when exercising the merge rule.
pub trait RpcMethod {
    /// Endpoint path the method is served on, joined to the client's base URL
    fn endpoint(&self) -> &'static str;

    /// Method name as sent on the wire (may differ from the local name)
    fn wire_name(&self) -> &'static str;

    /// Per-method default parameters, overlaid under the caller's
    fn default_params(&self) -> Option<Params> {
        None
    }
}

/// Operations served on `/rpc/admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminMethod {
    GetAdminToken,
    GetAddrs,
    SetAddrs,
    AddAddrs,
    RemoveAddrs,
    GetLocalIp,
    GetInfo,
    GetBalance,
    SetAdminHttpApi,
    GetSeed,
    SetSeed,
    GetLog,
    SetTunaConfig,
}

impl RpcMethod for AdminMethod {
    fn endpoint(&self) -> &'static str {
        ADMIN_ENDPOINT
    }

    fn wire_name(&self) -> &'static str {
        match self {
            AdminMethod::GetAdminToken => "getAdminToken",
            AdminMethod::GetAddrs => "getAddrs",
            AdminMethod::SetAddrs => "setAddrs",
            AdminMethod::AddAddrs => "addAddrs",
            AdminMethod::RemoveAddrs => "removeAddrs",
            AdminMethod::GetLocalIp => "getLocalIP",
            AdminMethod::GetInfo => "getInfo",
            AdminMethod::GetBalance => "getBalance",
            AdminMethod::SetAdminHttpApi => "setAdminHttpApi",
            AdminMethod::GetSeed => "getSeed",
            AdminMethod::SetSeed => "setSeed",
            AdminMethod::GetLog => "getLog",
            AdminMethod::SetTunaConfig => "setTunaConfig",
        }
    }
}

/// Operations served on `/rpc/network`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkMethod {
    GetNetworkConfig,
    SetNetworkConfig,
    AuthorizeMember,
    RemoveMember,
    DeleteWaiting,
    SetAcceptAddress,
    SendToken,
    NknPing,
}

impl RpcMethod for NetworkMethod {
    fn endpoint(&self) -> &'static str {
        NETWORK_ENDPOINT
    }

    fn wire_name(&self) -> &'static str {
        match self {
            NetworkMethod::GetNetworkConfig => "getNetworkConfig",
            NetworkMethod::SetNetworkConfig => "setNetworkConfig",
            NetworkMethod::AuthorizeMember => "authorizeMember",
            NetworkMethod::RemoveMember => "removeMember",
            NetworkMethod::DeleteWaiting => "deleteWaiting",
            NetworkMethod::SetAcceptAddress => "setAcceptAddress",
            NetworkMethod::SendToken => "sendToken",
            NetworkMethod::NknPing => "nknPing",
        }
    }
}
