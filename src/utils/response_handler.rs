// Response helpers shared by every handler
// Provides the `{ "error": ... }` shape and the response logging middleware

use std::convert::Infallible;
use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Body used for every non-200 outcome
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Builds a JSON error response with the given status
pub fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

/// Middleware that logs method, path, status and latency of every response.
/// Bodies are never logged; they may carry user content.
pub async fn response_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let started_at: DateTime<Utc> = Utc::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let response: Response<Body> = next.run(req).await;

    let status: StatusCode = response.status();
    let elapsed_ms: i64 = (Utc::now() - started_at).num_milliseconds();

    if status.is_server_error() {
        warn!(%method, %path, status = status.as_u16(), elapsed_ms, started_at = %started_at.to_rfc3339(), "Request failed");
    } else {
        info!(%method, %path, status = status.as_u16(), elapsed_ms, started_at = %started_at.to_rfc3339(), "Request completed");
    }

    Ok(response)
}
