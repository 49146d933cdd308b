//! Hourly data source trait definition.

use crate::error::Result;
use crate::model::{HourlyRequest, HourlySeries};

/// Trait for sources of hourly environmental data.
///
/// Implementations fetch named hourly columns for one location and range,
/// from whichever provider endpoint serves the requested kind of data.
/// A source that is reachable but has nothing usable to say (non-200 status,
/// response without an hourly block) returns an empty series rather than an
/// error; errors are reserved for transport and parse failures.
pub trait HourlySource: Send + Sync {
    /// Source name, for logging.
    fn name(&self) -> &str;

    /// Fetch hourly pollutant concentrations and the AQI column.
    fn fetch_air_quality(&self, request: &HourlyRequest) -> Result<HourlySeries>;

    /// Fetch hourly weather measurements.
    fn fetch_weather(&self, request: &HourlyRequest) -> Result<HourlySeries>;
}
