//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use sustainability_core::constants::APP_VERSION;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    model_backend: String,
    dataset_rows: usize,
    timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: APP_VERSION,
        model_backend: state.model_info.backend.clone(),
        dataset_rows: state.dataset.n_rows(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
