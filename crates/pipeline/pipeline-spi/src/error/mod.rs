//! Error types for the feature pipeline.

mod pipeline_error;

pub use pipeline_error::{PipelineError, Result};
