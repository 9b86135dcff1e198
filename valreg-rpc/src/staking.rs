//! Bindings for the staking contract's `getValidator` getter.
//!
//! The getter returns a fixed 12-element tuple. It is decoded by name into
//! [`ValidatorInfo`] and any payload that does not have that shape is rejected,
//! so a change in the contract surfaces as an error instead of silently
//! reading the wrong words.

use num_bigint::BigUint;
use sha3::{Digest, Keccak256};
use tracing::debug;

use crate::client::RpcClient;
use crate::error::RpcError;

/// Well-known staking contract address.
pub const STAKING_CONTRACT: &str = "0x0000000000000000000000000000000000001000";

pub const GET_VALIDATOR_SIGNATURE: &str = "getValidator(uint64)";

const WORD: usize = 32;

/// Number of head words in the `getValidator` return tuple.
pub const GET_VALIDATOR_ARITY: usize = 12;

/// First four bytes of the Keccak-256 hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// Calldata for `getValidator(id)`.
pub fn encode_get_validator(id: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + WORD);
    data.extend_from_slice(&selector(GET_VALIDATOR_SIGNATURE));
    data.extend_from_slice(&u64_word(id));
    data
}

/// Decoded `getValidator` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorInfo {
    pub auth_address: [u8; 20],
    pub flags: u64,
    pub stake: BigUint,
    pub acc_reward_per_token: BigUint,
    pub commission: BigUint,
    pub unclaimed_rewards: BigUint,
    pub consensus_stake: BigUint,
    pub consensus_commission: BigUint,
    pub snapshot_stake: BigUint,
    pub snapshot_commission: BigUint,
    pub secp_pubkey: Vec<u8>,
    pub bls_pubkey: Vec<u8>,
}

impl ValidatorInfo {
    /// Decodes ABI return data of the getter.
    pub fn decode(data: &[u8]) -> Result<Self, RpcError> {
        let head_len = GET_VALIDATOR_ARITY * WORD;
        if data.len() < head_len {
            return Err(RpcError::AbiDecode(format!(
                "getValidator response has {} bytes, expected at least {} ({} words)",
                data.len(),
                head_len,
                GET_VALIDATOR_ARITY
            )));
        }

        let word = |i: usize| head_word(data, i);

        let mut auth_address = [0u8; 20];
        let addr_word = word(0);
        if addr_word[..12].iter().any(|b| *b != 0) {
            return Err(RpcError::AbiDecode("authAddress word has dirty high bytes".to_string()));
        }
        auth_address.copy_from_slice(&addr_word[12..]);

        let uint = |i: usize| BigUint::from_bytes_be(word(i));

        Ok(Self {
            auth_address,
            flags: word_to_u64(word(1), "flags")?,
            stake: uint(2),
            acc_reward_per_token: uint(3),
            commission: uint(4),
            unclaimed_rewards: uint(5),
            consensus_stake: uint(6),
            consensus_commission: uint(7),
            snapshot_stake: uint(8),
            snapshot_commission: uint(9),
            secp_pubkey: read_bytes(data, word(10), "secpPubkey")?,
            bls_pubkey: read_bytes(data, word(11), "blsPubkey")?,
        })
    }

    /// ABI-encodes the tuple; the inverse of [`ValidatorInfo::decode`].
    pub fn encode(&self) -> Vec<u8> {
        let mut head = Vec::with_capacity(GET_VALIDATOR_ARITY * WORD);
        let mut addr = [0u8; WORD];
        addr[12..].copy_from_slice(&self.auth_address);
        head.extend_from_slice(&addr);
        head.extend_from_slice(&u64_word(self.flags));
        for value in [
            &self.stake,
            &self.acc_reward_per_token,
            &self.commission,
            &self.unclaimed_rewards,
            &self.consensus_stake,
            &self.consensus_commission,
            &self.snapshot_stake,
            &self.snapshot_commission,
        ] {
            head.extend_from_slice(&uint_word(value));
        }

        let secp_tail = bytes_tail(&self.secp_pubkey);
        let secp_offset = GET_VALIDATOR_ARITY * WORD;
        let bls_offset = secp_offset + secp_tail.len();
        head.extend_from_slice(&u64_word(secp_offset as u64));
        head.extend_from_slice(&u64_word(bls_offset as u64));

        head.extend_from_slice(&secp_tail);
        head.extend_from_slice(&bytes_tail(&self.bls_pubkey));
        head
    }

    /// Lowercase hex of the secp key, without `0x`.
    pub fn secp_hex(&self) -> String {
        hex::encode(&self.secp_pubkey)
    }

    /// Lowercase hex of the bls key, without `0x`.
    pub fn bls_hex(&self) -> String {
        hex::encode(&self.bls_pubkey)
    }
}

/// Typed access to the staking contract over JSON-RPC.
pub struct StakingClient {
    rpc: RpcClient,
    contract: String,
}

impl StakingClient {
    pub fn new(rpc: RpcClient, contract: impl Into<String>) -> Self {
        Self {
            rpc,
            contract: contract.into(),
        }
    }

    pub async fn get_validator(&self, id: u64) -> Result<ValidatorInfo, RpcError> {
        debug!("getValidator({}) via {}", id, self.rpc.url());
        let data = self.rpc.eth_call(&self.contract, &encode_get_validator(id)).await?;
        ValidatorInfo::decode(&data)
    }
}

fn head_word(data: &[u8], i: usize) -> &[u8] {
    &data[i * WORD..(i + 1) * WORD]
}

fn u64_word(value: u64) -> [u8; WORD] {
    let mut w = [0u8; WORD];
    w[WORD - 8..].copy_from_slice(&value.to_be_bytes());
    w
}

fn uint_word(value: &BigUint) -> [u8; WORD] {
    let bytes = value.to_bytes_be();
    let mut w = [0u8; WORD];
    let n = bytes.len().min(WORD);
    w[WORD - n..].copy_from_slice(&bytes[bytes.len() - n..]);
    w
}

fn bytes_tail(bytes: &[u8]) -> Vec<u8> {
    let padded = bytes.len().div_ceil(WORD) * WORD;
    let mut out = Vec::with_capacity(WORD + padded);
    out.extend_from_slice(&u64_word(bytes.len() as u64));
    out.extend_from_slice(bytes);
    out.resize(WORD + padded, 0);
    out
}

fn word_to_u64(word: &[u8], field: &str) -> Result<u64, RpcError> {
    if word[..WORD - 8].iter().any(|b| *b != 0) {
        return Err(RpcError::AbiDecode(format!("{} does not fit in 64 bits", field)));
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&word[WORD - 8..]);
    Ok(u64::from_be_bytes(buf))
}

fn read_bytes(data: &[u8], offset_word: &[u8], field: &str) -> Result<Vec<u8>, RpcError> {
    let offset = word_to_u64(offset_word, field)? as usize;
    let len_end = offset
        .checked_add(WORD)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| RpcError::AbiDecode(format!("{} offset {} out of range", field, offset)))?;
    let len = word_to_u64(&data[offset..len_end], field)? as usize;
    let end = len_end
        .checked_add(len)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| RpcError::AbiDecode(format!("{} length {} out of range", field, len)))?;
    Ok(data[len_end..end].to_vec())
}
