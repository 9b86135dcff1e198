//! Logo checks against a real HTTP server

use std::net::SocketAddr;
use std::time::Duration;

use axum::{http::header, http::StatusCode, response::IntoResponse, routing::get, Router};
use valreg_core::logo::check_logo;
use valreg_core::{AssetFetcher, HttpAssetFetcher};

async fn start_asset_host() -> SocketAddr {
    let app = Router::new()
        .route(
            "/logo.png",
            get(|| async { ([(header::CONTENT_TYPE, "image/png")], vec![0x89u8, b'P', b'N', b'G']) }),
        )
        .route(
            "/page",
            get(|| async { ([(header::CONTENT_TYPE, "text/html")], "<html></html>") }),
        )
        .route(
            "/slow.png",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                ([(header::CONTENT_TYPE, "image/png")], "late").into_response()
            }),
        )
        .fallback(|| async { StatusCode::NOT_FOUND });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_fetcher_reports_status_and_content_type() {
    let addr = start_asset_host().await;
    let fetcher = HttpAssetFetcher::new(Duration::from_secs(10)).unwrap();

    let image = fetcher.fetch(&format!("http://{}/logo.png", addr)).await.unwrap();
    assert_eq!(image.status, 200);
    assert_eq!(image.content_type, "image/png");

    let missing = fetcher.fetch(&format!("http://{}/nope.png", addr)).await.unwrap();
    assert_eq!(missing.status, 404);
}

#[tokio::test]
async fn test_not_found_logo_fails() {
    let addr = start_asset_host().await;
    let fetcher = HttpAssetFetcher::new(Duration::from_secs(10)).unwrap();

    let outcome = check_logo(&fetcher, &format!("http://{}/nope.png", addr)).await;

    assert!(!outcome.ok);
    assert!(outcome.messages.contains(&"❌ Logo URL returned HTTP 404".to_string()));
    // plain http is rejected on its own as well
    assert!(outcome
        .messages
        .contains(&"❌ Invalid 'logo': must start with https://".to_string()));
}

#[tokio::test]
async fn test_html_page_is_not_an_image() {
    let addr = start_asset_host().await;
    let fetcher = HttpAssetFetcher::new(Duration::from_secs(10)).unwrap();

    let outcome = check_logo(&fetcher, &format!("http://{}/page", addr)).await;

    assert!(outcome
        .messages
        .contains(&"❌ Logo URL is not an image (Content-Type: text/html)".to_string()));
    assert!(!outcome.messages.iter().any(|m| m.contains("returned HTTP")));
}

#[tokio::test]
async fn test_timeout_is_a_fetch_failure() {
    let addr = start_asset_host().await;
    let fetcher = HttpAssetFetcher::new(Duration::from_millis(200)).unwrap();

    let outcome = check_logo(&fetcher, &format!("http://{}/slow.png", addr)).await;

    assert!(!outcome.ok);
    assert!(outcome.messages.iter().any(|m| m.starts_with("❌ Failed to fetch logo:")));
}

#[tokio::test]
async fn test_empty_and_malformed_urls_do_not_panic() {
    let fetcher = HttpAssetFetcher::new(Duration::from_secs(1)).unwrap();

    let empty = check_logo(&fetcher, "").await;
    assert!(!empty.ok);
    assert_eq!(empty.messages.len(), 3);

    let garbage = check_logo(&fetcher, "https://").await;
    assert!(!garbage.ok);
    assert!(garbage.messages.iter().any(|m| m.starts_with("❌ Failed to fetch logo:")));
}
