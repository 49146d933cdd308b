//! Data Source Service Provider Interface
//!
//! Defines traits and types for fetching hourly environmental time series
//! (air quality and weather) from remote providers.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::HourlySource;
pub use error::{DataError, Result};
pub use model::{HourlyRange, HourlyRecord, HourlyRequest, HourlySeries, Location};
