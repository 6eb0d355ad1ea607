//! tests/relay/405.rs
//! Anything but POST is refused before the upstream is contacted.

use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use crate::common::{self, MockReply};

#[tokio::test]
async fn rejects_non_post_methods_without_calling_upstream() {
    let upstream = common::spawn_mock_upstream(MockReply::json(
        axum::http::StatusCode::OK,
        "{}",
    ));
    let base_url: String = common::spawn_app(common::test_env(
        &upstream.base_url,
        Some(common::TEST_API_KEY),
        &[],
    ));
    let client = reqwest::Client::new();

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let resp: reqwest::Response = client
            .request(method.clone(), common::analyze_url(&base_url))
            .body("{}")
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");

        let json: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
        assert_eq!(json, json!({ "error": "Method Not Allowed" }));
    }

    assert!(upstream.received().is_empty());
}

#[tokio::test]
async fn method_is_checked_before_the_api_key() {
    let base_url: String = common::spawn_app(common::test_env(
        &common::unreachable_base_url(),
        None,
        &[],
    ));

    let resp: reqwest::Response = reqwest::Client::new()
        .get(common::analyze_url(&base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
