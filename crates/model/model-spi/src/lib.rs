//! Model Service Provider Interface
//!
//! Defines the contracts for AQI regression models:
//! - The [`Regressor`] trait implemented by every model family
//! - Candidate model descriptions and evaluation metrics
//! - Model error types

pub mod contract;
pub mod error;
pub mod model;

pub use contract::Regressor;
pub use error::ModelError;
pub use model::{Candidate, ModelMetrics, TrainingReport};

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
