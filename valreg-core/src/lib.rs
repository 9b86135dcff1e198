//! Validator registry auditing.
//!
//! ## Module map
//! - `record.rs`: record model and the reference schema.
//! - `schema.rs` / `logo.rs` / `identity.rs` / `filename.rs`: the four record checks.
//! - `validator.rs`: per-record pipeline producing a [`ValidationReport`].
//! - `batch.rs`: file resolution and sequential batch runs.
//! - `aggregate.rs`: `secp`-keyed registry artifacts.
//! - `config.rs`: paths, contract address, timeouts and RPC settings for a run.

pub mod aggregate;
pub mod batch;
pub mod config;
pub mod error;
pub mod filename;
pub mod identity;
pub mod logo;
pub mod record;
pub mod report;
pub mod scan;
pub mod schema;
pub mod validator;

pub use batch::{resolve_filenames, run_batch, BatchOutcome};
pub use config::{RegistryConfig, RpcSettings};
pub use error::RegistryError;
pub use identity::{ChainKeySource, KeySource, OnChainKeyPair};
pub use logo::{AssetFetcher, AssetResponse, HttpAssetFetcher};
pub use record::{ReferenceSchema, ValidatorRecord};
pub use report::{CheckOutcome, ValidationReport};
pub use validator::RecordValidator;
