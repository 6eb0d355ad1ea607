// Relay route definitions

use axum::{routing::any, Router};

use crate::config::state::AppState;
use super::handler;

/// Path the client-side code posts to
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Creates router with the relay endpoint.
/// `any` so the handler itself answers wrong methods with the JSON 405.
pub fn analyze_routes() -> Router<AppState> {
    Router::new().route(ANALYZE_PATH, any(handler::analyze_handler))
}
