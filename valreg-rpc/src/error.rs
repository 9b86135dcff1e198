//! RPC error types

use thiserror::Error;

/// RPC errors
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("{message} (code {code})")]
    Custom { code: i32, message: String },

    #[error("ABI decode error: {0}")]
    AbiDecode(String),

    #[error("RPC request failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<RpcError>,
    },
}

impl RpcError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Transport failures and overloaded/unavailable endpoints are retried;
    /// errors reported by the node itself are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            RpcError::ConnectionError(_) | RpcError::Timeout => true,
            RpcError::HttpStatus(code) => *code == 429 || *code >= 500,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::ParseError(err.to_string())
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RpcError::Timeout
        } else if let Some(status) = err.status() {
            RpcError::HttpStatus(status.as_u16())
        } else if err.is_decode() {
            RpcError::ParseError(err.to_string())
        } else {
            RpcError::ConnectionError(err.to_string())
        }
    }
}
