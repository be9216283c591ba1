//! Model Module - Prediction over an opaque, pre-trained model
//!
//! The model is a capability (`Model::predict`), loaded once at startup.
//! The adapter turns whatever it does into a `PredictionResult`.

pub mod predictor;
pub mod linear;
#[cfg(feature = "onnx")]
pub mod onnx;
pub mod loader;
pub mod adapter;

// Re-export common types
pub use predictor::{Label, Model, ModelError};
pub use linear::LinearModel;
#[cfg(feature = "onnx")]
pub use onnx::OnnxModel;
pub use loader::{load_model, LoadedModel, ModelInfo};
pub use adapter::{predict, PredictionResult};
