use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;
use crate::status::AiHealth;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "guidefy-api"
    }))
}

/// GET /api-status
/// Returns the AI health record so the frontend can show whether the model is usable.
pub async fn api_status_handler(State(state): State<AppState>) -> Json<AiHealth> {
    Json(state.ai_status.snapshot())
}
