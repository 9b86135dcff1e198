//! Fixture registry, key oracle and asset host for pipeline tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};
use tempfile::TempDir;
use valreg_core::error::FetchError;
use valreg_core::{
    AssetFetcher, AssetResponse, KeySource, OnChainKeyPair, ReferenceSchema, RegistryConfig,
};
use valreg_rpc::RpcError;

pub const SECP: &str = "02c7d3b1a4f5e6d7c8b9a0f1e2d3c4b5a697887766554433221100ffeeddccbbaa";
pub const BLS: &str = "8f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0";

pub fn example_record() -> Value {
    json!({
        "id": 0,
        "name": "Example Validator",
        "secp": "000000000000000000000000000000000000000000000000000000000000000000",
        "bls": "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "website": "https://example.com",
        "description": "An example validator",
        "logo": "https://example.com/logo.png",
        "x": "https://x.com/example"
    })
}

pub fn conformant_record(id: u64) -> Value {
    json!({
        "id": id,
        "name": "Acme Staking",
        "secp": SECP,
        "bls": BLS,
        "website": "https://acme.example",
        "description": "Acme runs validators",
        "logo": "https://acme.example/logo.png",
        "x": "https://x.com/acme"
    })
}

/// Registry root in a temp directory with the reference record in place.
pub struct Registry {
    _dir: TempDir,
    pub config: RegistryConfig,
}

#[allow(dead_code)]
impl Registry {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = RegistryConfig::new(dir.path());
        std::fs::create_dir_all(config.schema_path.parent().unwrap()).unwrap();
        std::fs::write(&config.schema_path, example_record().to_string()).unwrap();
        for network in ["mainnet", "testnet"] {
            std::fs::create_dir_all(config.network_dir(network)).unwrap();
        }
        Self { _dir: dir, config }
    }

    pub fn schema(&self) -> ReferenceSchema {
        ReferenceSchema::load(&self.config.schema_path).expect("reference schema")
    }

    pub fn write_record(&self, network: &str, filename: &str, record: &Value) {
        let path = self.config.network_dir(network).join(filename);
        std::fs::write(path, serde_json::to_string_pretty(record).unwrap()).unwrap();
    }

    pub fn write_raw(&self, network: &str, filename: &str, raw: &str) {
        std::fs::write(self.config.network_dir(network).join(filename), raw).unwrap();
    }
}

/// Key oracle backed by a fixed table.
#[derive(Default)]
pub struct FixtureKeys {
    keys: HashMap<u64, OnChainKeyPair>,
    unreachable: bool,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FixtureKeys {
    pub fn with(mut self, id: u64, secp: &str, bls: &str) -> Self {
        self.keys.insert(
            id,
            OnChainKeyPair {
                secp: secp.to_string(),
                bls: bls.to_string(),
            },
        );
        self
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeySource for FixtureKeys {
    async fn get_validator_keys(&self, id: u64, _network: &str) -> Result<OnChainKeyPair, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(RpcError::RetriesExhausted {
                attempts: 3,
                last: Box::new(RpcError::Timeout),
            });
        }
        Ok(self.keys.get(&id).cloned().unwrap_or(OnChainKeyPair {
            secp: String::new(),
            bls: String::new(),
        }))
    }
}

/// Asset host that answers every URL the same way.
pub struct FixtureAssets {
    response: AssetResponse,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FixtureAssets {
    pub fn image() -> Self {
        Self::responding(200, "image/png")
    }

    pub fn responding(status: u16, content_type: &str) -> Self {
        Self {
            response: AssetResponse {
                status,
                content_type: content_type.to_string(),
            },
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetFetcher for FixtureAssets {
    async fn fetch(&self, _url: &str) -> Result<AssetResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}
