use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreInfo,
}

#[derive(Serialize)]
pub struct StoreInfo {
    pub configured: bool,
}

/// Structured health check endpoint. Returns server status, version, and
/// store configuration state as JSON.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        store: StoreInfo {
            configured: state.store.is_some(),
        },
    })
}

/// Readiness check — the service is only useful once it can reach the store.
pub async fn readiness_check(State(state): State<AppState>) -> &'static str {
    if state.store.is_none() {
        return "not ready: store credentials not configured";
    }
    "ready"
}
