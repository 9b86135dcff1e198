//! Logo asset check.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::{FetchError, RegistryError};
use crate::report::CheckOutcome;

pub const LOGO_SCHEME: &str = "https://";

/// Status line and declared type of a fetched asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    pub status: u16,
    pub content_type: String,
}

#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Issues one request for `url`. Only headers are needed.
    async fn fetch(&self, url: &str) -> Result<AssetResponse, FetchError>;
}

/// Fetches assets over HTTP; the body is never read.
pub struct HttpAssetFetcher {
    client: reqwest::Client,
}

impl HttpAssetFetcher {
    pub fn new(timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RegistryError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<AssetResponse, FetchError> {
        let res = self.client.get(url).send().await?;
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Ok(AssetResponse {
            status: res.status().as_u16(),
            content_type,
        })
    }
}

/// Runs every logo rule and accumulates all failures.
///
/// The fetch is attempted even when the URL already failed a syntactic rule,
/// so a bad URL reports both the rule and the transport error.
pub async fn check_logo(fetcher: &dyn AssetFetcher, url: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::pass();

    if url.trim().is_empty() {
        outcome.fail("❌ Invalid 'logo': field is missing or empty");
    }
    if !url.starts_with(LOGO_SCHEME) {
        outcome.fail(format!("❌ Invalid 'logo': must start with {}", LOGO_SCHEME));
    }

    match fetcher.fetch(url).await {
        Ok(response) => {
            if response.status != 200 {
                outcome.fail(format!("❌ Logo URL returned HTTP {}", response.status));
            }
            if !response.content_type.starts_with("image/") {
                outcome.fail(format!(
                    "❌ Logo URL is not an image (Content-Type: {})",
                    response.content_type
                ));
            }
        }
        Err(e) => {
            tracing::debug!("logo fetch for {:?} failed: {}", url, e);
            outcome.fail(format!("❌ Failed to fetch logo: {}", e));
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<AssetResponse, String>);

    #[async_trait]
    impl AssetFetcher for Fixed {
        async fn fetch(&self, _url: &str) -> Result<AssetResponse, FetchError> {
            self.0.clone().map_err(FetchError)
        }
    }

    fn image() -> Fixed {
        Fixed(Ok(AssetResponse {
            status: 200,
            content_type: "image/png".to_string(),
        }))
    }

    #[tokio::test]
    async fn test_reachable_https_image_passes() {
        let outcome = check_logo(&image(), "https://cdn.example.com/logo.png").await;
        assert!(outcome.ok);
        assert!(outcome.messages.is_empty());
    }

    #[tokio::test]
    async fn test_empty_url_fails_every_rule() {
        let fetcher = Fixed(Err("builder error: relative URL without a base".to_string()));
        let outcome = check_logo(&fetcher, "").await;
        assert!(!outcome.ok);
        assert_eq!(
            outcome.messages,
            vec![
                "❌ Invalid 'logo': field is missing or empty".to_string(),
                "❌ Invalid 'logo': must start with https://".to_string(),
                "❌ Failed to fetch logo: builder error: relative URL without a base".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_plain_http_fails_even_when_reachable() {
        let outcome = check_logo(&image(), "http://example.com/a.png").await;
        assert!(!outcome.ok);
        assert_eq!(
            outcome.messages,
            vec!["❌ Invalid 'logo': must start with https://".to_string()]
        );
    }

    #[tokio::test]
    async fn test_not_found_and_wrong_type_both_reported() {
        let fetcher = Fixed(Ok(AssetResponse {
            status: 404,
            content_type: "text/html; charset=utf-8".to_string(),
        }));
        let outcome = check_logo(&fetcher, "https://example.com/missing.png").await;
        assert!(!outcome.ok);
        assert_eq!(
            outcome.messages,
            vec![
                "❌ Logo URL returned HTTP 404".to_string(),
                "❌ Logo URL is not an image (Content-Type: text/html; charset=utf-8)".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_only_200_counts_as_success() {
        let fetcher = Fixed(Ok(AssetResponse {
            status: 204,
            content_type: "image/svg+xml".to_string(),
        }));
        let outcome = check_logo(&fetcher, "https://example.com/logo.svg").await;
        assert!(!outcome.ok);
        assert_eq!(outcome.messages, vec!["❌ Logo URL returned HTTP 204".to_string()]);
    }
}
