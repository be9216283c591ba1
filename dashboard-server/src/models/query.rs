//! Query parameters

use serde::Deserialize;
use sustainability_core::constants::{MAX_HISTOGRAM_BINS, MAX_PREVIEW_ROWS};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, Default)]
pub struct PreviewQuery {
    #[validate(range(min = 1, max = MAX_PREVIEW_ROWS))]
    pub rows: Option<usize>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct HistogramQuery {
    #[validate(length(min = 1))]
    pub column: String,

    #[validate(range(min = 1, max = MAX_HISTOGRAM_BINS))]
    pub bins: Option<usize>,
}
