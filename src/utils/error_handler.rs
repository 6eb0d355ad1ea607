// Error handling for the relay and for HTTP middleware layers

use axum::{
    BoxError,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::error;

use crate::upstream::UpstreamError;
use crate::utils::response_handler::error_response;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred.";

/// Every way a relay invocation can end without a 200
#[derive(Debug, ThisError)]
pub enum RelayError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("API key is not configured on the server.")]
    MissingApiKey,

    #[error("Failed to read request body: {0}")]
    BodyRejected(#[from] BytesRejection),

    #[error("Request body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RelayError {
    /// Status code sent to the caller
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BodyRejected(rejection) => rejection.status(),
            Self::InvalidBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(UpstreamError::Rejected { status, .. }) => *status,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field; internal detail stays in the logs
    pub fn client_message(&self) -> String {
        match self {
            Self::BodyRejected(rejection) => rejection.body_text(),
            Self::InvalidBody(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            Self::Upstream(UpstreamError::Rejected { .. }) => self.to_string(),
            Self::Upstream(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            Self::MethodNotAllowed | Self::MissingApiKey => self.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream(UpstreamError::Rejected { status, body }) => {
                error!(status = status.as_u16(), "Gemini API error: {body}");
            }
            Self::Upstream(err) => error!("Internal Server Error: {err:?}"),
            Self::InvalidBody(err) => error!("Internal Server Error: {err}"),
            Self::MissingApiKey => error!("Rejecting request: GEMINI_API_KEY is not configured"),
            Self::MethodNotAllowed | Self::BodyRejected(_) => {}
        }

        error_response(self.status(), self.client_message())
    }
}

/// Maps errors raised by tower layers to JSON error responses.
/// Oversized bodies never get here: they surface as `RelayError::BodyRejected`.
pub async fn handle_global_error(err: BoxError) -> Response {
    // 408 if the request took too long
    if let Some(e) = err.downcast_ref::<Elapsed>() {
        return error_response(StatusCode::REQUEST_TIMEOUT, format!("Request timeout: {e}"));
    }

    error!("Unhandled internal error: {err}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}

/// Fallback for routes that do not exist
pub async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}
