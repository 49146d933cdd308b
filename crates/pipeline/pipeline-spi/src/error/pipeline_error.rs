//! Feature pipeline error types.

use thiserror::Error;

/// Errors that can occur while building feature rows.
///
/// Empty inputs and empty joins are not errors — they produce an empty
/// output, the documented "no data" result.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    /// A joined hour lacks a column the feature schema requires
    #[error("Missing field '{field}' at {timestamp}")]
    MissingField { field: String, timestamp: String },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
