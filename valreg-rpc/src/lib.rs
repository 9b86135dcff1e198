//! Valreg RPC - JSON-RPC access to on-chain validator state
//!
//! Provides the HTTP JSON-RPC client used to reconcile registry records
//! against the staking contract, plus the ABI bindings for its getter.

pub mod types;
pub mod client;
pub mod error;
pub mod staking;

pub use types::*;
pub use client::{RpcClient, RpcClientConfig};
pub use error::RpcError;
pub use staking::{StakingClient, ValidatorInfo, STAKING_CONTRACT};

/// Default JSON-RPC port of execution nodes
pub const DEFAULT_PORT: u16 = 8545;
