//! Health check endpoint
//!
//! - GET /api/v1/health - Ping the database

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::middleware::{ApiError, AppState};

/// GET /api/v1/health
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.pool.ping().await.map_err(|e| {
        tracing::error!("Health check failed: {:#}", e);
        ApiError::internal_error("Database unavailable")
    })?;

    Ok(Json(json!({ "status": "ok" })))
}
