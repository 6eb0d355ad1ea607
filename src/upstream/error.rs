//! Upstream error types.

use axum::http::StatusCode;
use thiserror::Error;

/// Everything that can stop a `generateContent` call from yielding a JSON payload.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream answered, but with a non-success status.
    #[error("Gemini API error: {body}")]
    Rejected { status: StatusCode, body: String },

    /// Sending the request or reading the response failed.
    /// The URL is stripped before this is built so the key never leaks.
    #[error("Upstream transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream reported success but the body was not JSON.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl UpstreamError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}
