//! tests/relay/408.rs
//! The optional request timeout turns a hung upstream into a JSON 408.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use crate::common::{self, MockReply};

#[tokio::test]
async fn returns_408_when_configured_timeout_elapses() {
    let upstream = common::spawn_mock_upstream(
        MockReply::json(axum::http::StatusCode::OK, "{}").delayed(Duration::from_secs(3)),
    );
    let base_url: String = common::spawn_app(common::test_env(
        &upstream.base_url,
        Some(common::TEST_API_KEY),
        &[("REQUEST_TIMEOUT_SECONDS", "1")],
    ));

    let resp: reqwest::Response = tokio::time::timeout(
        Duration::from_secs(5),
        reqwest::Client::new()
            .post(common::analyze_url(&base_url))
            .body("{}")
            .send(),
    )
    .await
    .expect("Client timed out waiting for server.")
    .expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let json: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("Request timeout"));
}
