//! Forecast Service Provider Interface
//!
//! Defines the contracts for the iterative AQI forecaster:
//! - [`Clock`] for injectable time
//! - Forecast points and severity banding
//! - Forecast error types

pub mod contract;
pub mod error;
pub mod model;

pub use contract::Clock;
pub use error::ForecastError;
pub use model::{ForecastPoint, Severity};

/// Result type for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;
