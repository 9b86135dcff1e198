use serde::{Deserialize, Serialize};

/// Name of the primary network. Only this network honors an RPC override.
pub const PRIMARY_NETWORK: &str = "mainnet";

/// Environment variable holding the primary network's RPC override.
pub const RPC_OVERRIDE_ENV: &str = "MAINNET_RPC_URL";

/// Represents information about a validator network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Name of the network (e.g., "testnet", "mainnet")
    pub name: String,

    /// Description of the network
    pub description: String,

    /// Default JSON-RPC endpoint
    pub rpc_url: String,

    /// Address of the staking contract holding validator key material
    pub staking_contract: String,
}

/// All available networks
pub mod networks {
    use super::NetworkInfo;

    pub fn testnet() -> NetworkInfo {
        serde_json::from_str(include_str!("../networks/testnet/info.json"))
            .expect("Failed to parse testnet info")
    }

    pub fn mainnet() -> NetworkInfo {
        serde_json::from_str(include_str!("../networks/mainnet/info.json"))
            .expect("Failed to parse mainnet info")
    }

    /// Get all networks
    pub fn all() -> Vec<NetworkInfo> {
        vec![mainnet(), testnet()]
    }

    /// Get a network by name
    pub fn by_name(name: &str) -> Option<NetworkInfo> {
        match name {
            "testnet" => Some(testnet()),
            "mainnet" => Some(mainnet()),
            _ => None,
        }
    }
}

/// Templated endpoint used for any network without an override.
pub fn default_rpc_url(network: &str) -> String {
    format!("https://rpc-{}.monadinfra.com/", network)
}

/// Resolves the JSON-RPC endpoint for `network`.
///
/// `override_url` is only honored for [`PRIMARY_NETWORK`]; every other network
/// uses its catalogue entry, or the templated default when it is not catalogued.
pub fn resolve_rpc_url(network: &str, override_url: Option<&str>) -> String {
    if network == PRIMARY_NETWORK {
        if let Some(url) = override_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!("using RPC override for {}", network);
            return url.to_string();
        }
    }
    networks::by_name(network)
        .map(|n| n.rpc_url)
        .unwrap_or_else(|| default_rpc_url(network))
}
