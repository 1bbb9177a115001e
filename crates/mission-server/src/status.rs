use axum::extract::State;
use axum::response::Json;
use chrono::Utc;

use mission_core::freshness;
use mission_core::roster::{ROSTER, RosterEntry};
use mission_core::status::StatusResponse;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/status — the cached factory record: passthrough when fresh,
/// forced-offline view when stale, deterministic default when absent.
pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, AppError> {
    let store = state
        .store
        .as_ref()
        .ok_or_else(|| AppError::StoreUnavailable("store credentials not configured".to_string()))?;

    let record = store
        .get_status()
        .await
        .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

    Ok(Json(freshness::resolve(record, Utc::now(), state.stale_after)))
}

/// GET /api/agents — the shared roster table, keyed by agent id, that the
/// dashboard uses for its color/emoji map.
pub async fn get_agents() -> Json<Vec<RosterEntry>> {
    Json(ROSTER.to_vec())
}
