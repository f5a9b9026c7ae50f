use axum::routing::{get, post, put};
use axum::{middleware, Router};

use crate::auth;
use crate::handlers::{
    content_handlers::{
        create_content_handler, delete_content_handler, get_content_handler,
        list_content_handler, update_content_handler,
    },
    health_handler, preflight_handler,
    resolve_handlers::resolve_link_handler,
};
use crate::state::AppState;

/// Assemble all routes. Reads are public; the mutating routes sit behind the
/// shared-secret gate so the key check runs before any store access.
pub fn create_router(state: AppState) -> Router {
    let mutations = Router::new()
        .route("/content", post(create_content_handler))
        .route(
            "/content/{id}",
            put(update_content_handler).delete(delete_content_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin_key,
        ));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/content",
            get(list_content_handler).options(preflight_handler),
        )
        .route(
            "/content/{id}",
            get(get_content_handler).options(preflight_handler),
        )
        .route("/resolve", get(resolve_link_handler))
        .merge(mutations)
        .with_state(state)
}
