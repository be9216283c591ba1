//! ONNX Model - ONNX Runtime Integration
//!
//! Runs a classifier exported to ONNX (e.g. a scikit-learn logistic
//! regression converted with skl2onnx). The graph takes a single float
//! tensor `[rows, features]`; its first output is the label tensor.

use parking_lot::Mutex;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Tensor;

use crate::logic::features::FeatureTable;
use super::predictor::{Label, Model, ModelError};

pub struct OnnxModel {
    // `Session::run` needs exclusive access
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxModel {
    /// Load ONNX model from bytes
    pub fn from_bytes(model_bytes: &[u8]) -> Result<Self, ModelError> {
        log::info!("Loading ONNX model from memory ({} bytes)", model_bytes.len());

        let session = Session::builder()
            .map_err(|e| ModelError::Load(format!("Session builder error: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Load(format!("Optimization error: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| ModelError::Load(format!("Load from memory error: {}", e)))?;

        Self::from_session(session)
    }

    fn from_session(session: Session) -> Result<Self, ModelError> {
        if session.inputs.len() != 1 {
            return Err(ModelError::Unsupported(format!(
                "expected a single input tensor, graph declares {}",
                session.inputs.len()
            )));
        }

        let input_name = &session.inputs[0].name;
        let output_name = session.outputs.first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelError::Unsupported("No output defined".to_string()))?;

        log::info!("ONNX model ready (input: {}, label output: {})", input_name, output_name);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl Model for OnnxModel {
    fn predict(&self, rows: &FeatureTable) -> Result<Vec<Label>, ModelError> {
        let input_tensor = Tensor::from_array(rows.data().mapv(|v| v as f32))
            .map_err(|e| ModelError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs.get(self.output_name.as_str())
            .ok_or_else(|| ModelError::Inference("No output".to_string()))?;

        // skl2onnx emits int64 labels for integer classes; regressors-turned-classifiers emit floats
        if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
            return Ok(data.iter().copied().map(Label::Integer).collect());
        }

        let (_, data) = output.try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("Extract error: {}", e)))?;

        Ok(data.iter().map(|v| Label::Float(f64::from(*v))).collect())
    }

    fn backend(&self) -> &'static str {
        "onnx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARGMAX_CLASSIFIER: &[u8] = include_bytes!("../../../fixtures/argmax_classifier.onnx");
    const MEAN_SCORER: &[u8] = include_bytes!("../../../fixtures/mean_scorer.onnx");

    fn rows(values: &[Vec<f64>]) -> FeatureTable {
        let columns = crate::logic::features::FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect();
        FeatureTable::from_rows(columns, values).unwrap()
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let result = OnnxModel::from_bytes(b"definitely not a protobuf graph");
        assert!(matches!(result, Err(ModelError::Load(_))));
    }

    #[test]
    fn test_int64_labels() {
        let model = OnnxModel::from_bytes(ARGMAX_CLASSIFIER).unwrap();
        assert_eq!(model.backend(), "onnx");

        // Graph returns the index of the largest feature
        let table = rows(&[vec![500.0, 20.0, 50.0, 300.0], vec![10.0, 5.0, 50.0, 300.0]]);
        assert_eq!(model.predict(&table).unwrap(), vec![Label::Integer(0), Label::Integer(3)]);
    }

    #[test]
    fn test_float_labels() {
        let model = OnnxModel::from_bytes(MEAN_SCORER).unwrap();

        let table = rows(&[vec![1.0, 2.0, 3.0, 6.0]]);
        assert_eq!(model.predict(&table).unwrap(), vec![Label::Float(3.0)]);
    }

    #[test]
    fn test_session_reused_across_calls() {
        let model = OnnxModel::from_bytes(ARGMAX_CLASSIFIER).unwrap();
        let table = rows(&[vec![1.0, 9.0, 2.0, 3.0]]);

        for _ in 0..3 {
            assert_eq!(model.predict(&table).unwrap(), vec![Label::Integer(1)]);
        }
    }
}
