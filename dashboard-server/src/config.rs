//! Configuration module

use std::env;

use sustainability_core::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Model artifact, loaded once at startup
    pub model_path: String,

    /// Dataset CSV, loaded once at startup
    pub dataset_path: String,

    /// Default number of rows in the dataset preview
    pub preview_rows: usize,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: constants::get_model_path(),

            dataset_path: constants::get_dataset_path(),

            preview_rows: env::var("PREVIEW_ROWS")
                .ok()
                .and_then(|r| r.parse().ok())
                .filter(|r| (1..=constants::MAX_PREVIEW_ROWS).contains(r))
                .unwrap_or(constants::DEFAULT_PREVIEW_ROWS),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            model_path: constants::DEFAULT_MODEL_PATH.to_string(),
            dataset_path: constants::DEFAULT_DATASET_PATH.to_string(),
            preview_rows: constants::DEFAULT_PREVIEW_ROWS,
            environment: "development".to_string(),
        }
    }
}
