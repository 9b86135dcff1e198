//! HTTP JSON-RPC client for execution nodes

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use serde_json::json;
use tracing::{debug, warn};

use crate::error::RpcError;
use crate::types::*;

/// RPC Client configuration
#[derive(Debug, Clone)]
pub struct RpcClientConfig {
    pub url: String,
    /// Bound on a single attempt, connect through response body.
    pub timeout: Duration,
    /// Total attempts for retryable failures, including the first.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles after each retry.
    pub backoff: Duration,
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self {
            url: format!("http://localhost:{}/", crate::DEFAULT_PORT),
            timeout: Duration::from_secs(30),
            max_attempts: 3,
            backoff: Duration::from_millis(500),
        }
    }
}

/// RPC Client
pub struct RpcClient {
    config: RpcClientConfig,
    client: reqwest::Client,
    request_id: AtomicI64,
}

impl RpcClient {
    pub fn new(config: RpcClientConfig) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RpcError::ConnectionError(e.to_string()))?;

        Ok(Self {
            config,
            client,
            request_id: AtomicI64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Send a request, retrying transport failures with exponential backoff.
    pub async fn request(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value, RpcError> {
        let attempts = self.config.max_attempts.max(1);
        let mut delay = self.config.backoff;
        let mut attempt = 1;

        loop {
            match self.send_once(method, params.clone()).await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < attempts => {
                    warn!(
                        "{} to {} failed (attempt {}/{}): {}; retrying in {:?}",
                        method, self.config.url, attempt, attempts, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                    attempt += 1;
                }
                Err(e) if e.is_retryable() && attempts > 1 => {
                    return Err(RpcError::RetriesExhausted {
                        attempts,
                        last: Box::new(e),
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value, RpcError> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);
        let request = RpcRequest::new(method, params).with_id(id);

        debug!("-> {} #{} {}", self.config.url, id, method);

        let res = self.client.post(&self.config.url).json(&request).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(RpcError::HttpStatus(status.as_u16()));
        }

        let response: RpcResponse = res.json().await?;
        if let Some(error) = response.error {
            return Err(RpcError::Custom {
                code: error.code,
                message: error.message,
            });
        }

        response
            .result
            .ok_or_else(|| RpcError::InvalidResponse(format!("{} returned neither result nor error", method)))
    }

    /// Read-only contract call at the latest block. Returns the raw return data.
    pub async fn eth_call(&self, to: &str, calldata: &[u8]) -> Result<Vec<u8>, RpcError> {
        let params = json!([CallRequest::new(to, calldata), LATEST_BLOCK]);
        let result = self.request("eth_call", params).await?;

        let encoded = result
            .as_str()
            .ok_or_else(|| RpcError::InvalidResponse(format!("eth_call result is not a string: {}", result)))?;
        decode_hex_data(encoded)
    }
}

/// Decodes a `0x`-prefixed hex data string.
pub fn decode_hex_data(encoded: &str) -> Result<Vec<u8>, RpcError> {
    let stripped = encoded.strip_prefix("0x").unwrap_or(encoded);
    hex::decode(stripped).map_err(|e| RpcError::InvalidResponse(format!("invalid hex data: {}", e)))
}
