//! API Routes
//!
//! Configures the Axum router with the cache admin endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, delete_entry_handler, get_entry_handler, health_handler,
    invalidate_handler, invalidate_resource_handler, keys_handler, set_entry_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check
/// - `GET /cache/stats` - Counters and hit rate
/// - `GET /cache/keys` - Keys, least recently used first
/// - `PUT /cache/entries` - Store a document
/// - `GET /cache/entries/:key` - Read a document
/// - `DELETE /cache/entries/:key` - Delete a document
/// - `POST /cache/invalidate` - Drop keys containing a pattern
/// - `POST /cache/invalidate/:resource` - Drop every key of a resource
/// - `DELETE /cache` - Drop everything
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/cache", delete(clear_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache/keys", get(keys_handler))
        .route("/cache/entries", put(set_entry_handler))
        .route(
            "/cache/entries/:key",
            get(get_entry_handler).delete(delete_entry_handler),
        )
        .route("/cache/invalidate", post(invalidate_handler))
        .route("/cache/invalidate/:resource", post(invalidate_resource_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
