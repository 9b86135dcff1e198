//! Reconciliation of registry keys against on-chain state.

use async_trait::async_trait;
use valreg_rpc::{RpcClient, RpcError, StakingClient};

use crate::config::{RegistryConfig, RpcSettings};
use crate::report::CheckOutcome;

/// Key material registered on chain for one validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnChainKeyPair {
    pub secp: String,
    pub bls: String,
}

/// Source of truth for validator keys.
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn get_validator_keys(&self, id: u64, network: &str) -> Result<OnChainKeyPair, RpcError>;
}

/// Reads keys from the staking contract, one fresh query per call.
pub struct ChainKeySource {
    rpc: RpcSettings,
    staking_contract: String,
}

impl ChainKeySource {
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            rpc: config.rpc.clone(),
            staking_contract: config.staking_contract.clone(),
        }
    }
}

#[async_trait]
impl KeySource for ChainKeySource {
    async fn get_validator_keys(&self, id: u64, network: &str) -> Result<OnChainKeyPair, RpcError> {
        let client = RpcClient::new(self.rpc.client_config(network))?;
        let staking = StakingClient::new(client, self.staking_contract.clone());
        let info = staking.get_validator(id).await?;
        Ok(OnChainKeyPair {
            secp: info.secp_hex(),
            bls: info.bls_hex(),
        })
    }
}

/// Compares both keys by exact string equality; each key reports on its own.
pub fn reconcile_keys(local_secp: &str, local_bls: &str, chain: &OnChainKeyPair) -> CheckOutcome {
    let mut outcome = CheckOutcome::pass();

    if chain.secp != local_secp {
        outcome.fail(format!(
            "❌ SECP mismatch:\n   local={}\n   chain={}",
            local_secp, chain.secp
        ));
    } else {
        outcome.note("✅ SECP key matches on-chain value");
    }

    if chain.bls != local_bls {
        outcome.fail(format!(
            "❌ BLS mismatch:\n   local={}\n   chain={}",
            local_bls, chain.bls
        ));
    } else {
        outcome.note("✅ BLS key matches on-chain value");
    }

    outcome
}
