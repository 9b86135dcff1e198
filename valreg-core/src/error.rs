//! Registry error types

use std::path::PathBuf;

use thiserror::Error;
use valreg_rpc::RpcError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to load reference schema {}: {reason}", .path.display())]
    Schema { path: PathBuf, reason: String },

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The chain could not be queried; reconciliation has no ground truth.
    #[error("On-chain lookup for validator {id} on {network} failed: {source}")]
    Oracle {
        id: u64,
        network: String,
        #[source]
        source: RpcError,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to serialize registry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("❌ Validation failed for {} files: {}", .failed.len(), .failed.join(" "))]
    ValidationFailed { failed: Vec<String> },
}

/// Transport failure while fetching a remote asset.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct FetchError(pub String);

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError(err.to_string())
    }
}
