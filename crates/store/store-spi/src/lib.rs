//! Store Service Provider Interface
//!
//! Defines the contracts for persisting engineered feature rows and
//! trained model artifacts:
//! - [`FeatureStore`]: rows keyed by `(city, timestamp_unix)`
//! - [`ModelRegistry`]: versioned model artifacts with metrics
//! - Store error types distinguishing "no data" from "unreachable"

pub mod contract;
pub mod error;
pub mod model;

pub use contract::{FeatureStore, ModelRegistry};
pub use error::StoreError;
pub use model::RegisteredModel;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
