//! Dataset overview handlers

use axum::{extract::{Query, State}, Json};
use validator::Validate;
use sustainability_core::logic::dataset::{describe, ColumnSummary, Preview};

use crate::{AppState, AppResult};
use crate::models::PreviewQuery;

/// First rows of the dataset
pub async fn preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> AppResult<Json<Preview>> {
    query.validate()?;

    let rows = query.rows.unwrap_or(state.config.preview_rows);
    Ok(Json(state.dataset.head(rows)))
}

/// Per-column statistical summary
pub async fn summary(State(state): State<AppState>) -> Json<Vec<ColumnSummary>> {
    Json(describe(&state.dataset))
}
