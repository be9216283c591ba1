//! Input Controls - Bounds and defaults for the four prediction inputs
//!
//! Describes the widgets a display surface renders. The surface clamps raw
//! widget values through these descriptors before handing them to the collector.

use serde::{Deserialize, Serialize};

/// Widget type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// Free numeric entry with real values
    NumberInput,
    /// Integer slider
    Slider,
}

/// Descriptor for one input control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlSpec {
    /// Feature column this control feeds
    pub feature: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub kind: ControlKind,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ControlSpec {
    /// Map a raw value into range. Sliders snap to whole numbers.
    pub fn clamp(&self, raw: f64) -> f64 {
        let value = if raw.is_nan() { self.default } else { raw };
        let value = match self.kind {
            ControlKind::Slider => value.round(),
            ControlKind::NumberInput => value,
        };
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const ENERGY_CONTROL: ControlSpec = ControlSpec {
    feature: "Energy_Usage",
    label: "Energy Usage (kWh)",
    unit: "kWh",
    kind: ControlKind::NumberInput,
    min: 0.0,
    max: 1000.0,
    default: 500.0,
    step: 0.01,
};

pub const WASTE_CONTROL: ControlSpec = ControlSpec {
    feature: "Waste_Generation",
    label: "Waste Generation (tons)",
    unit: "tons",
    kind: ControlKind::NumberInput,
    min: 0.0,
    max: 100.0,
    default: 20.0,
    step: 0.01,
};

pub const RENEWABLE_CONTROL: ControlSpec = ControlSpec {
    feature: "Renewable_Usage",
    label: "Renewable Usage (%)",
    unit: "%",
    kind: ControlKind::Slider,
    min: 0.0,
    max: 100.0,
    default: 50.0,
    step: 1.0,
};

pub const CARBON_CONTROL: ControlSpec = ControlSpec {
    feature: "Carbon_Emission",
    label: "Carbon Emission (kg)",
    unit: "kg",
    kind: ControlKind::Slider,
    min: 0.0,
    max: 1000.0,
    default: 300.0,
    step: 1.0,
};

/// All controls, in feature layout order
pub const CONTROLS: [ControlSpec; 4] = [ENERGY_CONTROL, WASTE_CONTROL, RENEWABLE_CONTROL, CARBON_CONTROL];
