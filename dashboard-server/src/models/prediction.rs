//! Prediction request/response

use serde::{Deserialize, Serialize};
use sustainability_core::logic::features::controls::{
    CARBON_CONTROL, ENERGY_CONTROL, RENEWABLE_CONTROL, WASTE_CONTROL,
};
use sustainability_core::{collect, FeatureRecord, PredictionResult};

/// Raw control values; missing fields fall back to the control default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "Energy_Usage", alias = "energy_usage")]
    pub energy_usage: Option<f64>,
    #[serde(rename = "Waste_Generation", alias = "waste_generation")]
    pub waste_generation: Option<f64>,
    #[serde(rename = "Renewable_Usage", alias = "renewable_usage")]
    pub renewable_usage: Option<f64>,
    #[serde(rename = "Carbon_Emission", alias = "carbon_emission")]
    pub carbon_emission: Option<f64>,
}

impl PredictRequest {
    /// Clamp every value to its control and assemble the record
    pub fn to_record(&self) -> FeatureRecord {
        let energy = ENERGY_CONTROL.clamp(self.energy_usage.unwrap_or(ENERGY_CONTROL.default));
        let waste = WASTE_CONTROL.clamp(self.waste_generation.unwrap_or(WASTE_CONTROL.default));
        let renewable = RENEWABLE_CONTROL.clamp(self.renewable_usage.unwrap_or(RENEWABLE_CONTROL.default));
        let carbon = CARBON_CONTROL.clamp(self.carbon_emission.unwrap_or(CARBON_CONTROL.default));

        collect(energy, waste, renewable as i64, carbon as i64)
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// The record actually sent to the model
    pub input: FeatureRecord,
    pub result: PredictionResult,
    pub message: String,
}

impl PredictResponse {
    pub fn new(input: FeatureRecord, result: PredictionResult) -> Self {
        let message = result.display_message();
        Self { input, result, message }
    }
}
