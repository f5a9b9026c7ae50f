pub mod content_handlers;
pub mod resolve_handlers;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Liveness probe.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Explicit CORS preflight answer: 204 with no body.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
