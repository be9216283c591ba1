//! Model Loader - One-time startup load of the model artifact
//!
//! Backend is picked from the file extension. The loaded model is immutable;
//! there is no reload path.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::logic::features::LayoutInfo;
use super::linear::LinearModel;
use super::predictor::{Model, ModelError};

/// What the surface reports about the loaded artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_path: String,
    pub backend: String,
    pub sha256: String,
    pub size_bytes: u64,
    /// Training columns, if the artifact records them
    pub feature_names: Option<Vec<String>>,
    /// Whether the recorded training columns equal the input layout
    pub layout_compatible: Option<bool>,
    pub layout: LayoutInfo,
    pub loaded_at: DateTime<Utc>,
}

pub struct LoadedModel {
    pub model: Box<dyn Model>,
    pub info: ModelInfo,
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel").field("info", &self.info).finish_non_exhaustive()
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Load the model artifact at `path`
pub fn load_model(path: &Path) -> Result<LoadedModel, ModelError> {
    if !path.exists() {
        return Err(ModelError::NotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)
        .map_err(|e| ModelError::Load(format!("{}: {}", path.display(), e)))?;
    let checksum = sha256_hex(&bytes);

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let model: Box<dyn Model> = match extension.as_str() {
        "json" => {
            let text = std::str::from_utf8(&bytes)
                .map_err(|e| ModelError::Load(format!("model is not UTF-8: {}", e)))?;
            Box::new(LinearModel::from_json(text)?)
        }
        #[cfg(feature = "onnx")]
        "onnx" => Box::new(super::onnx::OnnxModel::from_bytes(&bytes)?),
        other => {
            return Err(ModelError::Unsupported(format!(
                "no backend for '.{}' artifacts ({})",
                other,
                path.display()
            )))
        }
    };

    let layout = LayoutInfo::current();
    let feature_names = model.feature_names();
    let layout_compatible = feature_names.as_ref().map(|names| layout.matches(names));

    if layout_compatible == Some(false) {
        log::warn!(
            "Model was trained on {:?}, inputs are {:?}; predictions will fail",
            feature_names,
            layout.feature_names
        );
    }

    log::info!(
        "Model loaded: {} (backend: {}, sha256: {})",
        path.display(),
        model.backend(),
        &checksum[..12]
    );

    let info = ModelInfo {
        model_path: path.display().to_string(),
        backend: model.backend().to_string(),
        sha256: checksum,
        size_bytes: bytes.len() as u64,
        feature_names,
        layout_compatible,
        layout,
        loaded_at: Utc::now(),
    };

    Ok(LoadedModel { model, info })
}
