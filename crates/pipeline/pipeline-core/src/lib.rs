//! Feature Pipeline Core
//!
//! Joins the pollutant and weather series and derives the engineered
//! feature rows.

mod features;

pub use features::FeatureBuilder;

// Re-export API and SPI for downstream convenience
pub use pipeline_api::*;
