//! Logic Module - Prediction pipeline and dataset analytics
//!
//! - `features/` - Input layout, control bounds, record assembly
//! - `model/` - Model capability, backends, loader, prediction adapter
//! - `dataset/` - CSV dataset, summary statistics, chart data

pub mod features;
pub mod model;
pub mod dataset;
