//! Feature Record - One prediction request's inputs
//!
//! Built fresh from control state for every request and dropped afterwards.

use serde::{Deserialize, Serialize};

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};
use super::table::FeatureTable;

/// The four model inputs, serialized under the model's column names in layout order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "Energy_Usage")]
    pub energy_usage: f64,
    #[serde(rename = "Waste_Generation")]
    pub waste_generation: f64,
    #[serde(rename = "Renewable_Usage")]
    pub renewable_usage: i64,
    #[serde(rename = "Carbon_Emission")]
    pub carbon_emission: i64,
}

impl FeatureRecord {
    /// Values in layout order
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.energy_usage,
            self.waste_generation,
            self.renewable_usage as f64,
            self.carbon_emission as f64,
        ]
    }

    /// (column, value) pairs in layout order
    pub fn named_values(&self) -> Vec<(&'static str, f64)> {
        FEATURE_LAYOUT.iter().copied().zip(self.values()).collect()
    }

    /// Wrap as the single-row table the model consumes
    pub fn to_table(&self) -> FeatureTable {
        let columns: [&str; FEATURE_COUNT] = [
            FEATURE_LAYOUT[0],
            FEATURE_LAYOUT[1],
            FEATURE_LAYOUT[2],
            FEATURE_LAYOUT[3],
        ];
        FeatureTable::single_row(columns, self.values())
    }

    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": super::layout::FEATURE_VERSION,
            "layout_hash": super::layout::layout_hash(),
            "values": self,
        })
    }
}

// ============================================================================
// COLLECTOR
// ============================================================================

/// Assemble a record from the current control values.
///
/// Values are taken as-is: bounding them is the caller's job (see
/// [`ControlSpec::clamp`](super::controls::ControlSpec::clamp)).
pub fn collect(energy: f64, waste: f64, renewable: i64, carbon: i64) -> FeatureRecord {
    FeatureRecord {
        energy_usage: energy,
        waste_generation: waste,
        renewable_usage: renewable,
        carbon_emission: carbon,
    }
}

/// Record built from every control's default value
pub fn collect_defaults() -> FeatureRecord {
    use super::controls::{CARBON_CONTROL, ENERGY_CONTROL, RENEWABLE_CONTROL, WASTE_CONTROL};

    collect(
        ENERGY_CONTROL.default,
        WASTE_CONTROL.default,
        RENEWABLE_CONTROL.default as i64,
        CARBON_CONTROL.default as i64,
    )
}
