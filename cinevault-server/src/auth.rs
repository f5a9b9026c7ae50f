use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::errors::{ApiError, ApiResult};
use crate::state::AppState;

/// Header carrying the shared admin secret on mutating requests.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Shared-secret gate for mutating routes. The header value is compared
/// byte-for-byte against the configured key; absent or mismatched keys are
/// rejected before any store access happens.
pub async fn require_admin_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let supplied = request
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if supplied == Some(state.config.admin_key.as_str()) {
        Ok(next.run(request).await)
    } else {
        warn!(
            "rejected {} {} with missing or invalid admin key",
            request.method(),
            request.uri().path()
        );
        Err(ApiError::unauthorized("Unauthorized - Invalid admin key"))
    }
}
