//! Data Consumer API
//!
//! Configuration types and request builders for consumers of hourly
//! environmental data.

mod config;

pub use config::{
    air_quality_request, weather_request, BackfillConfig, AIR_QUALITY_VARIABLES, WEATHER_VARIABLES,
};

// Re-export SPI types
pub use data_spi::{
    DataError, HourlyRange, HourlyRecord, HourlyRequest, HourlySeries, HourlySource, Location,
    Result,
};
