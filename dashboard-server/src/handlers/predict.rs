//! Prediction handlers
//!
//! Success and failure both answer 200; the outcome is in the body.

use axum::{extract::{Query, State}, Json};
use sustainability_core::predict as run_prediction;

use crate::AppState;
use crate::models::{PredictRequest, PredictResponse};

fn respond(state: &AppState, request: &PredictRequest) -> PredictResponse {
    let record = request.to_record();
    let result = run_prediction(state.model.as_ref(), &record);

    tracing::debug!(success = result.is_success(), input = %record.to_log_entry(), "prediction");

    PredictResponse::new(record, result)
}

/// Predict from query parameters (live widget updates)
pub async fn from_query(
    State(state): State<AppState>,
    Query(request): Query<PredictRequest>,
) -> Json<PredictResponse> {
    Json(respond(&state, &request))
}

/// Predict from a JSON body
pub async fn from_body(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Json<PredictResponse> {
    Json(respond(&state, &request))
}
