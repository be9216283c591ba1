//! Input control descriptors

use axum::Json;
use sustainability_core::logic::features::{ControlSpec, CONTROLS};

/// Bounds and defaults for the four prediction inputs, in feature order
pub async fn list() -> Json<Vec<ControlSpec>> {
    Json(CONTROLS.to_vec())
}
