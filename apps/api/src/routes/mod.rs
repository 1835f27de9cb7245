pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::career::handlers::handle_career;
use crate::resume::handlers::handle_resume_analyze;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api-status", get(health::api_status_handler))
        // Career API
        .route("/career", post(handle_career))
        // Resume API
        .route(
            "/resume-analyze",
            post(handle_resume_analyze).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}
