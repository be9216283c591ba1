//! Request/response models

pub mod prediction;
pub mod query;

pub use prediction::*;
pub use query::*;
