//! tests/relay/500.rs
//! Missing configuration and failed upstream exchanges map to HTTP 500.

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::common::{self, MockReply};

async fn post_json(base_url: &str, body: &'static str) -> (StatusCode, Value) {
    let resp: reqwest::Response = reqwest::Client::new()
        .post(common::analyze_url(base_url))
        .body(body)
        .send()
        .await
        .expect("Failed to make request.");

    let status = resp.status();
    let json: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    (status, json)
}

#[tokio::test]
async fn returns_500_when_api_key_is_missing() {
    let upstream = common::spawn_mock_upstream(MockReply::json(
        axum::http::StatusCode::OK,
        "{}",
    ));
    let base_url: String = common::spawn_app(common::test_env(&upstream.base_url, None, &[]));

    let (status, json) = post_json(&base_url, r#"{"contents":[]}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "API key is not configured on the server." }));
    assert!(upstream.received().is_empty());
}

#[tokio::test]
async fn returns_500_when_upstream_is_unreachable() {
    let base_url: String = common::spawn_app(common::test_env(
        &common::unreachable_base_url(),
        Some(common::TEST_API_KEY),
        &[],
    ));

    let (status, json) = post_json(&base_url, r#"{"contents":[]}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "An internal error occurred." }));
}

#[tokio::test]
async fn returns_500_when_upstream_success_is_not_json() {
    let upstream = common::spawn_mock_upstream(MockReply::text(
        axum::http::StatusCode::OK,
        "<html>gateway</html>",
    ));
    let base_url: String = common::spawn_app(common::test_env(
        &upstream.base_url,
        Some(common::TEST_API_KEY),
        &[],
    ));

    let (status, json) = post_json(&base_url, r#"{"contents":[]}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "An internal error occurred." }));
    assert_eq!(upstream.received().len(), 1);
}

#[tokio::test]
async fn returns_500_when_inbound_body_is_not_json() {
    let upstream = common::spawn_mock_upstream(MockReply::json(
        axum::http::StatusCode::OK,
        "{}",
    ));
    let base_url: String = common::spawn_app(common::test_env(
        &upstream.base_url,
        Some(common::TEST_API_KEY),
        &[],
    ));

    let (status, json) = post_json(&base_url, "not json at all").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "An internal error occurred." }));
    assert!(upstream.received().is_empty());
}
