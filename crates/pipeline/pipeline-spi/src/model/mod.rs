//! Feature pipeline models.

mod feature_row;

pub use feature_row::{FeatureRow, FEATURE_COLUMNS};
