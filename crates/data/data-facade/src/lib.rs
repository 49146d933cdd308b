//! Data Facade
//!
//! High-level API for fetching hourly environmental data. Re-exports all
//! public types from the data stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use data_facade::prelude::*;
//!
//! let client = OpenMeteoClient::new();
//! let request = air_quality_request(
//!     Location::new(24.8607, 67.0011),
//!     HourlyRange::ForecastDays(3),
//!     "Asia/Karachi",
//! );
//! let series = client.fetch_air_quality(&request)?;
//! ```

// Re-export everything from core (which includes API and SPI)
pub use data_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use data_spi::HourlySource;

    // Models and errors
    pub use data_spi::{
        DataError, HourlyRange, HourlyRecord, HourlyRequest, HourlySeries, Location, Result,
    };

    // Configuration
    pub use data_api::{
        air_quality_request, weather_request, BackfillConfig, AIR_QUALITY_VARIABLES,
        WEATHER_VARIABLES,
    };

    // Implementations
    pub use data_core::{backfill_history, OpenMeteoClient};
}
