//! Sustainability Predictor Dashboard Server
//!
//! Serves the dashboard's three tabs over HTTP: dataset overview, chart data
//! and live prediction from the sidebar inputs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 SUSTAINABILITY DASHBOARD                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐ │
//! │  │  Data     │  │  Visuals  │  │  Prediction             │ │
//! │  │  Overview │  │  (charts) │  │  controls → model       │ │
//! │  └─────┬─────┘  └─────┬─────┘  └────────────┬────────────┘ │
//! │        └──────────────┼──────────────────────┘              │
//! │                       ▼                                     │
//! │        ┌──────────────────────────────┐                    │
//! │        │ Dataset (CSV) + Model (once) │                    │
//! │        └──────────────────────────────┘                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod error;


use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use sustainability_core::{constants, load_model, Dataset, Model, ModelInfo};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sustainability_dashboard=debug,sustainability_core=info,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("{} v{} starting...", constants::APP_NAME, constants::APP_VERSION);

    // Model and dataset are loaded once; failing either is fatal
    let loaded = load_model(Path::new(&config.model_path))
        .with_context(|| format!("failed to load model from {}", config.model_path))?;

    let dataset = Dataset::from_path(Path::new(&config.dataset_path))
        .with_context(|| format!("failed to load dataset from {}", config.dataset_path))?;

    let state = AppState::new(loaded.model, loaded.info, dataset, config.clone());
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("invalid HOST:PORT configuration")?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state, read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn Model>,
    pub model_info: Arc<ModelInfo>,
    pub dataset: Arc<Dataset>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(model: Box<dyn Model>, model_info: ModelInfo, dataset: Dataset, config: config::Config) -> Self {
        Self {
            model: Arc::from(model),
            model_info: Arc::new(model_info),
            dataset: Arc::new(dataset),
            config,
        }
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))

        // Prediction tab
        .route("/api/v1/controls", get(handlers::controls::list))
        .route("/api/v1/model", get(handlers::model::info))
        .route("/api/v1/predict", get(handlers::predict::from_query))
        .route("/api/v1/predict", post(handlers::predict::from_body))

        // Data overview tab
        .route("/api/v1/data/preview", get(handlers::data::preview))
        .route("/api/v1/data/summary", get(handlers::data::summary))

        // Visuals tab
        .route("/api/v1/visuals/correlation", get(handlers::visuals::correlation))
        .route("/api/v1/visuals/histogram", get(handlers::visuals::histogram))

        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
