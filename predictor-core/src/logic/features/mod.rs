//! Features Module - Prediction input assembly
//!
//! Layout, control bounds, the per-request record and the table a model reads.

pub mod layout;
pub mod controls;
pub mod record;
pub mod table;


// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, LayoutInfo};
pub use controls::{ControlKind, ControlSpec, CONTROLS};
pub use record::{collect, collect_defaults, FeatureRecord};
pub use table::{FeatureTable, TableShapeError};
