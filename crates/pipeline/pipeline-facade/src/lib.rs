//! Feature Pipeline Facade
//!
//! High-level API for feature building. Re-exports all public types from the
//! pipeline stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use pipeline_facade::prelude::*;
//!
//! let builder = FeatureBuilder::new(FeatureConfig::new("Karachi"));
//! let rows = builder.build(&air_quality, &weather)?;
//! ```

// Re-export everything from core (which includes API and SPI)
pub use pipeline_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use pipeline_api::FeatureConfig;
    pub use pipeline_core::FeatureBuilder;
    pub use pipeline_spi::{FeatureRow, PipelineError, Result, FEATURE_COLUMNS};
}
