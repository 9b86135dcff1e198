//! Run configuration shared by every pipeline component.

use std::path::{Path, PathBuf};
use std::time::Duration;

use valreg_networks::resolve_rpc_url;
use valreg_rpc::{RpcClientConfig, STAKING_CONTRACT};

/// Reference record used as the structural template, relative to the registry root.
pub const REFERENCE_RECORD: &str =
    "example/000000000000000000000000000000000000000000000000000000000000000000.json";

/// Extension every record file carries.
pub const RECORD_EXTENSION: &str = ".json";

pub const LOGO_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for on-chain reads.
#[derive(Debug, Clone)]
pub struct RpcSettings {
    /// Endpoint override, honored for the primary network only.
    pub mainnet_override: Option<String>,
    pub timeout: Duration,
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RpcSettings {
    fn default() -> Self {
        let client = RpcClientConfig::default();
        Self {
            mainnet_override: None,
            timeout: client.timeout,
            max_attempts: client.max_attempts,
            backoff: client.backoff,
        }
    }
}

impl RpcSettings {
    /// Client configuration for `network`'s resolved endpoint.
    pub fn client_config(&self, network: &str) -> RpcClientConfig {
        RpcClientConfig {
            url: resolve_rpc_url(network, self.mainnet_override.as_deref()),
            timeout: self.timeout,
            max_attempts: self.max_attempts,
            backoff: self.backoff,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Registry root; holds one directory per network.
    pub base_dir: PathBuf,
    pub schema_path: PathBuf,
    pub staking_contract: String,
    pub logo_timeout: Duration,
    pub rpc: RpcSettings,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

impl RegistryConfig {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        Self {
            schema_path: base_dir.join(REFERENCE_RECORD),
            base_dir,
            staking_contract: STAKING_CONTRACT.to_string(),
            logo_timeout: LOGO_TIMEOUT,
            rpc: RpcSettings::default(),
        }
    }

    pub fn with_schema_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_path = path.into();
        self
    }

    pub fn with_rpc(mut self, rpc: RpcSettings) -> Self {
        self.rpc = rpc;
        self
    }

    pub fn network_dir(&self, network: &str) -> PathBuf {
        self.base_dir.join(network)
    }

    /// File name of the aggregated artifact inside a network directory.
    pub fn artifact_name(network: &str) -> String {
        format!("{}_validators{}", network, RECORD_EXTENSION)
    }

    pub fn artifact_path(&self, network: &str) -> PathBuf {
        self.network_dir(network).join(Self::artifact_name(network))
    }
}
