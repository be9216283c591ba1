//! Predictor - The opaque model capability
//!
//! Anything that turns a feature table into one label per row. Backends
//! (ONNX, linear JSON) live next to this file; callers only see the trait.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureTable;

// ============================================================================
// LABEL
// ============================================================================

/// A class label exactly as the model produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Integer(v) => write!(f, "{}", v),
            Label::Float(v) => write!(f, "{}", v),
            Label::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Integer(value)
    }
}

impl From<f64> for Label {
    fn from(value: f64) -> Self {
        Label::Float(value)
    }
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model artifact not found: {0}")]
    NotFound(String),

    #[error("failed to load model: {0}")]
    Load(String),

    #[error("unsupported model artifact: {0}")]
    Unsupported(String),

    #[error("feature names mismatch: expected {expected:?}, got {actual:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("expected {expected} features, got {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("inference failed: {0}")]
    Inference(String),
}

// ============================================================================
// MODEL TRAIT
// ============================================================================

/// Read-only predictor shared across requests
pub trait Model: Send + Sync {
    /// One label per input row
    fn predict(&self, rows: &FeatureTable) -> Result<Vec<Label>, ModelError>;

    /// Backend name ("onnx", "linear", ...)
    fn backend(&self) -> &'static str;

    /// Column names the model was trained on, when the artifact records them
    fn feature_names(&self) -> Option<Vec<String>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display_is_verbatim() {
        assert_eq!(Label::from("Sustainable").to_string(), "Sustainable");
        assert_eq!(Label::from(1i64).to_string(), "1");
        assert_eq!(Label::from(0.75).to_string(), "0.75");
    }

    #[test]
    fn test_label_untagged_serde() {
        let labels: Vec<Label> = serde_json::from_str(r#"["Low", 2, 0.5]"#).unwrap();
        assert_eq!(labels, vec![Label::from("Low"), Label::Integer(2), Label::Float(0.5)]);
        assert_eq!(serde_json::to_string(&labels).unwrap(), r#"["Low",2,0.5]"#);
    }
}
