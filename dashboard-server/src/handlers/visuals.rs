//! Chart data handlers

use axum::{extract::{Query, State}, Json};
use validator::Validate;
use sustainability_core::logic::dataset::{correlation_matrix, histogram as build_histogram, CorrelationMatrix, Histogram};

use crate::{AppState, AppResult};
use crate::models::HistogramQuery;

/// Correlation heatmap data
pub async fn correlation(State(state): State<AppState>) -> Json<CorrelationMatrix> {
    Json(correlation_matrix(&state.dataset))
}

/// Distribution of one column
pub async fn histogram(
    State(state): State<AppState>,
    Query(query): Query<HistogramQuery>,
) -> AppResult<Json<Histogram>> {
    query.validate()?;

    let histogram = build_histogram(&state.dataset, &query.column, query.bins)?;
    Ok(Json(histogram))
}
