//! Prediction Adapter - Record in, displayable outcome out
//!
//! Every failure inside the model collapses into one fixed message and the
//! cause is discarded. Bad input and model faults look the same to the caller.

use serde::{Deserialize, Serialize};

use crate::constants::PREDICTION_FAILED_MESSAGE;
use crate::logic::features::FeatureRecord;
use super::predictor::{Label, Model};

/// Outcome of one prediction attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PredictionResult {
    Success { label: Label },
    Failure { message: String },
}

impl PredictionResult {
    pub fn failure() -> Self {
        PredictionResult::Failure {
            message: PREDICTION_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PredictionResult::Success { .. })
    }

    pub fn label(&self) -> Option<&Label> {
        match self {
            PredictionResult::Success { label } => Some(label),
            PredictionResult::Failure { .. } => None,
        }
    }

    /// Text the surface shows for this outcome
    pub fn display_message(&self) -> String {
        match self {
            PredictionResult::Success { label } => {
                format!("Predicted Sustainability Score/Label: {}", label)
            }
            PredictionResult::Failure { message } => message.clone(),
        }
    }
}

/// Run `model` on a single record.
///
/// Only the first returned label counts; an empty label list is a failure.
pub fn predict<M: Model + ?Sized>(model: &M, record: &FeatureRecord) -> PredictionResult {
    let table = record.to_table();

    match model.predict(&table) {
        Ok(labels) => match labels.into_iter().next() {
            Some(label) => {
                log::debug!("Prediction succeeded: {}", label);
                PredictionResult::Success { label }
            }
            None => {
                log::debug!("Prediction failed");
                PredictionResult::failure()
            }
        },
        Err(_) => {
            log::debug!("Prediction failed");
            PredictionResult::failure()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::logic::features::{collect, FeatureTable};
    use crate::logic::model::predictor::ModelError;

    /// Always answers with the same labels
    struct FixedModel(Vec<Label>);

    impl Model for FixedModel {
        fn predict(&self, _rows: &FeatureTable) -> Result<Vec<Label>, ModelError> {
            Ok(self.0.clone())
        }

        fn backend(&self) -> &'static str {
            "fixed"
        }
    }

    /// Always errors
    struct BrokenModel;

    impl Model for BrokenModel {
        fn predict(&self, _rows: &FeatureTable) -> Result<Vec<Label>, ModelError> {
            Err(ModelError::Inference("internal model fault".to_string()))
        }

        fn backend(&self) -> &'static str {
            "broken"
        }
    }

    /// Fails on every other call
    struct FlakyModel(AtomicUsize);

    impl Model for FlakyModel {
        fn predict(&self, rows: &FeatureTable) -> Result<Vec<Label>, ModelError> {
            if self.0.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
                Err(ModelError::Shape { expected: 5, actual: rows.n_cols() })
            } else {
                Ok(vec![Label::from("Sustainable")])
            }
        }

        fn backend(&self) -> &'static str {
            "flaky"
        }
    }

    /// Label depends only on the input: renewable share above half
    struct ThresholdModel;

    impl Model for ThresholdModel {
        fn predict(&self, rows: &FeatureTable) -> Result<Vec<Label>, ModelError> {
            let column = rows.column_index("Renewable_Usage")
                .ok_or_else(|| ModelError::FeatureMismatch { expected: vec![], actual: rows.columns().to_vec() })?;
            Ok(rows.data().outer_iter().map(|r| Label::Integer(i64::from(r[column] > 50.0))).collect())
        }

        fn backend(&self) -> &'static str {
            "threshold"
        }
    }

    #[test]
    fn test_defaults_predict_success() {
        let model = FixedModel(vec![Label::from("Sustainable")]);
        let result = predict(&model, &collect(500.0, 20.0, 50, 300));

        assert_eq!(result, PredictionResult::Success { label: Label::from("Sustainable") });
        assert_eq!(result.display_message(), "Predicted Sustainability Score/Label: Sustainable");
    }

    #[test]
    fn test_first_label_wins() {
        let model = FixedModel(vec![Label::Integer(1), Label::Integer(0)]);
        let result = predict(&model, &collect(1.0, 1.0, 1, 1));
        assert_eq!(result.label(), Some(&Label::Integer(1)));
    }

    #[test]
    fn test_minimums_with_error_collapse_to_fixed_message() {
        let result = predict(&BrokenModel, &collect(0.0, 0.0, 0, 0));

        assert_eq!(result, PredictionResult::Failure { message: PREDICTION_FAILED_MESSAGE.to_string() });
        assert!(!result.display_message().contains("internal model fault"));
    }

    #[test]
    fn test_empty_labels_are_failure() {
        let result = predict(&FixedModel(vec![]), &collect(1.0, 1.0, 1, 1));
        assert!(!result.is_success());
        assert_eq!(result.display_message(), PREDICTION_FAILED_MESSAGE);
    }

    #[test]
    fn test_failure_does_not_poison_next_request() {
        let model = FlakyModel(AtomicUsize::new(0));
        let record = collect(500.0, 20.0, 50, 300);

        assert!(!predict(&model, &record).is_success());
        assert!(predict(&model, &record).is_success());
    }

    #[test]
    fn test_pure_model_is_idempotent() {
        let record = collect(1000.0, 100.0, 100, 1000);
        let first = predict(&ThresholdModel, &record);
        let second = predict(&ThresholdModel, &record);

        assert_eq!(first, second);
        assert_eq!(first, PredictionResult::Success { label: Label::Integer(1) });
    }

    #[test]
    fn test_works_through_trait_object() {
        let model: Box<dyn Model> = Box::new(FixedModel(vec![Label::Float(0.5)]));
        let result = predict(model.as_ref(), &collect(1.0, 1.0, 1, 1));
        assert_eq!(result.label(), Some(&Label::Float(0.5)));
    }

    #[test]
    fn test_result_serialization() {
        let ok = PredictionResult::Success { label: Label::from("Sustainable") };
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"status": "success", "label": "Sustainable"})
        );

        let failed = serde_json::to_value(PredictionResult::failure()).unwrap();
        assert_eq!(failed["status"], "failure");
        assert_eq!(failed["message"], PREDICTION_FAILED_MESSAGE);
    }
}
