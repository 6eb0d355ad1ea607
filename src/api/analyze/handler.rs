// Relay handler: forwards the caller's body to Gemini with the server-held key

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::value::RawValue;
use tracing::{debug, instrument};

use crate::config::state::AppState;
use crate::utils::error_handler::RelayError;

/// Handles `/api/analyze` for every method so non-POST requests get the JSON 405.
///
/// The body is only checked for JSON syntax and then forwarded byte for byte;
/// its shape is the upstream's concern.
#[instrument(skip(state, body))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, RelayError> {
    if method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    let api_key: &str = state
        .environment
        .gemini_api_key
        .as_deref()
        .ok_or(RelayError::MissingApiKey)?;

    let body: Bytes = body?;
    if !body.is_empty() {
        serde_json::from_slice::<&RawValue>(&body)?;
    }

    debug!(bytes = body.len(), endpoint = %state.gemini.endpoint(), "Forwarding request to Gemini");

    let payload: Box<RawValue> = state.gemini.generate_content(api_key, body).await?;

    Ok((StatusCode::OK, Json(payload)).into_response())
}
