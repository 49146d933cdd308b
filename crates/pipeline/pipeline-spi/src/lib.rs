//! Feature Pipeline Service Provider Interface
//!
//! Defines the engineered feature row and the errors of feature building.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{PipelineError, Result};
pub use model::{FeatureRow, FEATURE_COLUMNS};
