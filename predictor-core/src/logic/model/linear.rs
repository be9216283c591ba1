//! Linear Model - Logistic regression serialized as JSON
//!
//! Artifact format:
//!
//! ```json
//! {
//!   "feature_names": ["Energy_Usage", "Waste_Generation", "Renewable_Usage", "Carbon_Emission"],
//!   "classes": ["Not Sustainable", "Sustainable"],
//!   "coefficients": [[-0.004, -0.03, 0.05, -0.002]],
//!   "intercepts": [0.9]
//! }
//! ```
//!
//! One coefficient row means binary (positive score picks `classes[1]`),
//! one row per class means multinomial (argmax).

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureTable;
use super::predictor::{Label, Model, ModelError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub classes: Vec<Label>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearModel {
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let model: LinearModel = serde_json::from_str(text)
            .map_err(|e| ModelError::Load(format!("invalid linear model: {}", e)))?;
        model.check()?;
        Ok(model)
    }

    /// Structural consistency of the artifact
    fn check(&self) -> Result<(), ModelError> {
        let width = self.feature_names.len();

        if self.classes.len() < 2 {
            return Err(ModelError::Load("need at least two classes".to_string()));
        }

        let binary = self.coefficients.len() == 1 && self.classes.len() == 2;
        if !binary && self.coefficients.len() != self.classes.len() {
            return Err(ModelError::Load(format!(
                "{} coefficient rows for {} classes",
                self.coefficients.len(),
                self.classes.len()
            )));
        }

        if self.intercepts.len() != self.coefficients.len() {
            return Err(ModelError::Load(format!(
                "{} intercepts for {} coefficient rows",
                self.intercepts.len(),
                self.coefficients.len()
            )));
        }

        if let Some(row) = self.coefficients.iter().find(|r| r.len() != width) {
            return Err(ModelError::Load(format!(
                "coefficient row has {} weights, expected {}",
                row.len(),
                width
            )));
        }

        Ok(())
    }

    fn is_binary(&self) -> bool {
        self.coefficients.len() == 1
    }

    /// Raw decision scores, one per coefficient row
    pub fn decision_function(&self, row: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(weights, intercept)| {
                weights
                    .iter()
                    .zip(row)
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + intercept
            })
            .collect()
    }

    fn classify(&self, scores: &[f64]) -> Result<Label, ModelError> {
        let index = if self.is_binary() {
            usize::from(scores[0] > 0.0)
        } else {
            scores
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| i)
                .ok_or_else(|| ModelError::Inference("no decision scores".to_string()))?
        };

        self.classes
            .get(index)
            .cloned()
            .ok_or_else(|| ModelError::Inference(format!("class index {} out of range", index)))
    }
}

impl Model for LinearModel {
    fn predict(&self, rows: &FeatureTable) -> Result<Vec<Label>, ModelError> {
        if rows.n_cols() != self.feature_names.len() {
            return Err(ModelError::Shape {
                expected: self.feature_names.len(),
                actual: rows.n_cols(),
            });
        }

        if rows.columns() != self.feature_names.as_slice() {
            return Err(ModelError::FeatureMismatch {
                expected: self.feature_names.clone(),
                actual: rows.columns().to_vec(),
            });
        }

        rows.data()
            .outer_iter()
            .map(|row| {
                let values = row.to_vec();
                let scores = self.decision_function(&values);
                self.classify(&scores)
            })
            .collect()
    }

    fn backend(&self) -> &'static str {
        "linear"
    }

    fn feature_names(&self) -> Option<Vec<String>> {
        Some(self.feature_names.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::{collect, FEATURE_LAYOUT};

    fn binary_model() -> LinearModel {
        LinearModel {
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            classes: vec![Label::from("Not Sustainable"), Label::from("Sustainable")],
            // Renewables push towards sustainable, carbon pushes away
            coefficients: vec![vec![0.0, 0.0, 0.1, -0.01]],
            intercepts: vec![0.0],
        }
    }

    #[test]
    fn test_binary_prediction() {
        let model = binary_model();

        let green = collect(500.0, 20.0, 90, 100).to_table();
        assert_eq!(model.predict(&green).unwrap(), vec![Label::from("Sustainable")]);

        let dirty = collect(500.0, 20.0, 10, 900).to_table();
        assert_eq!(model.predict(&dirty).unwrap(), vec![Label::from("Not Sustainable")]);
    }

    #[test]
    fn test_multinomial_argmax() {
        let model = LinearModel {
            feature_names: vec!["x".into()],
            classes: vec![Label::Integer(0), Label::Integer(1), Label::Integer(2)],
            coefficients: vec![vec![-1.0], vec![0.0], vec![1.0]],
            intercepts: vec![0.0, 0.5, 0.0],
        };
        model.check().unwrap();

        let table = FeatureTable::from_rows(vec!["x".into()], &[vec![-3.0], vec![0.0], vec![3.0]]).unwrap();
        assert_eq!(
            model.predict(&table).unwrap(),
            vec![Label::Integer(0), Label::Integer(1), Label::Integer(2)]
        );
    }

    #[test]
    fn test_feature_name_mismatch() {
        let model = binary_model();
        let table = collect(1.0, 2.0, 3, 4)
            .to_table()
            .renamed(vec!["energy".into(), "waste".into(), "renewable".into(), "carbon".into()])
            .unwrap();

        assert!(matches!(model.predict(&table), Err(ModelError::FeatureMismatch { .. })));
    }

    #[test]
    fn test_feature_count_mismatch() {
        let model = binary_model();
        let table = FeatureTable::single_row(["Energy_Usage"], [1.0]);

        assert!(matches!(
            model.predict(&table),
            Err(ModelError::Shape { expected: 4, actual: 1 })
        ));
    }

    #[test]
    fn test_decision_boundary_in_double_precision() {
        let model = LinearModel {
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            classes: vec![Label::from("No"), Label::from("Yes")],
            coefficients: vec![vec![1.0, 0.0, 0.0, 0.0]],
            intercepts: vec![-0.1],
        };

        // 0.1 - 0.1 is exactly zero in f64; rounding 0.1 through f32 would tip it positive
        let table = collect(0.1, 0.0, 0, 0).to_table();
        assert_eq!(model.decision_function(&table.row(0).unwrap().to_vec()), vec![0.0]);
        assert_eq!(model.predict(&table).unwrap(), vec![Label::from("No")]);
    }

    #[test]
    fn test_from_json_rejects_inconsistent_artifact() {
        let json = r#"{
            "feature_names": ["a", "b"],
            "classes": ["no", "yes"],
            "coefficients": [[1.0]],
            "intercepts": [0.0]
        }"#;
        assert!(matches!(LinearModel::from_json(json), Err(ModelError::Load(_))));

        assert!(LinearModel::from_json("not json").is_err());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let json = serde_json::to_string(&binary_model()).unwrap();
        assert_eq!(LinearModel::from_json(&json).unwrap(), binary_model());
    }
}
