//! Central Configuration Constants
//!
//! Single source of truth for defaults shared by the core and the dashboard.

/// Default model artifact path
pub const DEFAULT_MODEL_PATH: &str = "assets/sustainability.json";

/// Default dataset path
pub const DEFAULT_DATASET_PATH: &str = "assets/green_tech_data.csv";

/// Rows shown in the dataset preview
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Upper bound for a preview request
pub const MAX_PREVIEW_ROWS: usize = 100;

/// Upper bound for an explicit histogram bin count
pub const MAX_HISTOGRAM_BINS: usize = 200;

/// Shown for every failed prediction, whatever the cause
pub const PREDICTION_FAILED_MESSAGE: &str =
    "❌ Prediction failed. Please check input format and feature names.";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Sustainability Predictor";

/// Get model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get dataset path from environment or use default
pub fn get_dataset_path() -> String {
    std::env::var("DATASET_PATH")
        .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string())
}
