//! Forecast Facade
//!
//! High-level API for iterative AQI forecasting. Re-exports all public
//! types from the forecast stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use forecast_facade::prelude::*;
//!
//! let forecaster = Forecaster::with_defaults();
//! let points = forecaster.forecast(&model, &latest_row, clock.now())?;
//! ```

// Re-export everything from core, plus the API and SPI surfaces
pub use forecast_core::*;

pub use forecast_api::{ForecastConfig, LagFeedback};
pub use forecast_spi::{ForecastError, ForecastPoint, Result, Severity};

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use forecast_spi::Clock;

    // Models and errors
    pub use forecast_spi::{ForecastError, ForecastPoint, Result, Severity};

    // Configuration
    pub use forecast_api::{ForecastConfig, LagFeedback};

    // Implementations
    pub use forecast_core::{Forecaster, SystemClock, TtlCache};
}
