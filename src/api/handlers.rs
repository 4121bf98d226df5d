//! API Handlers
//!
//! HTTP request handlers for the cache admin endpoints.

use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::{Resource, SharedCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, EntryResponse, HealthResponse,
    InvalidateRequest, InvalidateResponse, KeysResponse, SetEntryRequest, SetResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds a handle to the process-wide cache; cloning the state clones the
/// handle, not the cache.
#[derive(Clone)]
pub struct AppState {
    pub cache: SharedCache,
    /// TTL applied to writes that name none
    pub default_ttl: Duration,
}

impl AppState {
    pub fn new(cache: SharedCache, default_ttl: Duration) -> Self {
        Self { cache, default_ttl }
    }

    /// Builds the cache and state from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(SharedCache::new(config.capacity), config.default_ttl())
    }
}

/// Handler for PUT /cache/entries
pub async fn set_entry_handler(
    State(state): State<AppState>,
    Json(req): Json<SetEntryRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl(state.default_ttl);
    state.cache.set(req.key.clone(), req.value, ttl).await;

    Ok(Json(SetResponse::new(req.key, ttl.as_millis() as u64)))
}

/// Handler for GET /cache/entries/:key
///
/// Absent and expired keys both answer 404.
pub async fn get_entry_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<EntryResponse>> {
    match state.cache.get(&key).await {
        Some(value) => Ok(Json(EntryResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /cache/entries/:key
///
/// Any key is accepted; one that was never stored reports `removed: false`.
pub async fn delete_entry_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    let removed = state.cache.delete(&key).await;
    Json(DeleteResponse::new(key, removed))
}

/// Handler for POST /cache/invalidate
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidateRequest>,
) -> Result<Json<InvalidateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let removed = state.cache.invalidate_pattern(&req.pattern).await;
    info!(pattern = %req.pattern, removed, "pattern invalidated");

    Ok(Json(InvalidateResponse::new(req.pattern, removed)))
}

/// Handler for POST /cache/invalidate/:resource
pub async fn invalidate_resource_handler(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    let resource: Resource = resource.parse()?;

    let removed = state.cache.invalidate_resource(resource).await;
    info!(%resource, removed, "resource invalidated");

    Ok(Json(InvalidateResponse::new(resource.prefix(), removed)))
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.clear().await;
    info!(removed, "cache cleared");

    Json(ClearResponse { removed })
}

/// Handler for GET /cache/keys
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    Json(KeysResponse {
        keys: state.cache.keys().await,
    })
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    let capacity = state.cache.capacity().await;

    Json(StatsResponse::new(&stats, capacity))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::new(SharedCache::new(100), Duration::from_secs(60))
    }

    fn set_request(key: &str, value: serde_json::Value) -> SetEntryRequest {
        SetEntryRequest {
            key: key.to_string(),
            value,
            ttl_ms: None,
            preset: None,
        }
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state();

        let result = set_entry_handler(
            State(state.clone()),
            Json(set_request("projects:all", json!([{"id": 1}]))),
        )
        .await;
        assert_eq!(result.unwrap().ttl_ms, 60_000);

        let response = get_entry_handler(State(state), Path("projects:all".to_string()))
            .await
            .unwrap();
        assert_eq!(response.value, json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let result = get_entry_handler(State(test_state()), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = test_state();
        set_entry_handler(State(state.clone()), Json(set_request("to_delete", json!(1))))
            .await
            .unwrap();

        let response = delete_entry_handler(State(state.clone()), Path("to_delete".to_string())).await;
        assert!(response.removed);

        let response = delete_entry_handler(State(state), Path("to_delete".to_string())).await;
        assert!(!response.removed);
    }

    #[tokio::test]
    async fn test_delete_overlong_key_is_a_noop() {
        let state = test_state();
        state.cache.set("projects:all", json!([]), Duration::from_secs(60)).await;
        let key = "k".repeat(300);

        let response = delete_entry_handler(State(state.clone()), Path(key.clone())).await;

        assert_eq!(response.key, key);
        assert!(!response.removed);
        assert_eq!(state.cache.size().await, 1);
    }

    #[tokio::test]
    async fn test_invalidate_handlers() {
        let state = test_state();
        for key in ["projects:all", "projects:7", "services:all", "team:all"] {
            state.cache.set(key, json!(null), Duration::from_secs(60)).await;
        }

        let response = invalidate_handler(
            State(state.clone()),
            Json(InvalidateRequest {
                pattern: "projects:".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.removed, 2);

        let response = invalidate_resource_handler(State(state.clone()), Path("team".to_string()))
            .await
            .unwrap();
        assert_eq!(response.removed, 1);
        assert_eq!(response.pattern, "team:");

        assert_eq!(state.cache.keys().await, vec!["services:all".to_string()]);
    }

    #[tokio::test]
    async fn test_invalidate_unknown_resource() {
        let result = invalidate_resource_handler(State(test_state()), Path("users".to_string())).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_clear_and_stats_handlers() {
        let state = test_state();
        state.cache.set("a", json!(1), Duration::from_secs(60)).await;
        state.cache.set("b", json!(2), Duration::from_secs(60)).await;

        let response = clear_handler(State(state.clone())).await;
        assert_eq!(response.removed, 2);

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.invalidations, 2);
        assert_eq!(stats.capacity, 100);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_set_invalid_request() {
        let result = set_entry_handler(State(test_state()), Json(set_request("", json!(1)))).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }
}
