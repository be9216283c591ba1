//! Sustainability Predictor - Core
//!
//! Collects the four sustainability inputs, runs them through an opaque
//! pre-trained model and backs the dashboard's dataset overview and charts.
//!
//! ```text
//! controls ──► features::collect ──► FeatureRecord ──► model::predict ──► PredictionResult
//!                                                          │
//!                                            Box<dyn Model> (loaded once)
//! ```

pub mod constants;
pub mod logic;

pub use logic::dataset::{Dataset, DatasetError};
pub use logic::features::{collect, FeatureRecord, FeatureTable};
pub use logic::model::{load_model, predict, Label, LoadedModel, Model, ModelError, ModelInfo, PredictionResult};
