//! Request construction and backfill configuration.

use std::time::Duration;

use data_spi::{HourlyRange, HourlyRequest, Location};
use serde::{Deserialize, Serialize};

/// Pollutant columns requested from the air-quality endpoint.
///
/// `us_aqi` is the forecast target; the rest feed the model as-is.
pub const AIR_QUALITY_VARIABLES: [&str; 7] = [
    "us_aqi",
    "pm10",
    "pm2_5",
    "carbon_monoxide",
    "nitrogen_dioxide",
    "sulphur_dioxide",
    "ozone",
];

/// Weather columns requested from the forecast and archive endpoints.
pub const WEATHER_VARIABLES: [&str; 4] = [
    "temperature_2m",
    "relative_humidity_2m",
    "wind_speed_10m",
    "precipitation",
];

/// Build the standard air-quality request for a location and range.
pub fn air_quality_request(location: Location, range: HourlyRange, timezone: &str) -> HourlyRequest {
    HourlyRequest::new(location, &AIR_QUALITY_VARIABLES, range).with_timezone(timezone)
}

/// Build the standard weather request for a location and range.
pub fn weather_request(location: Location, range: HourlyRange, timezone: &str) -> HourlyRequest {
    HourlyRequest::new(location, &WEATHER_VARIABLES, range).with_timezone(timezone)
}

/// Configuration for the historical backfill.
///
/// Weather history comes from the archive endpoint in one call; air-quality
/// history is fetched in fixed-size batches stepping backwards from today,
/// throttled between requests and capped by a safety limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackfillConfig {
    /// Total days of history to cover
    pub days: i64,
    /// Days per air-quality batch
    pub batch_days: i64,
    /// Safety cap on the number of air-quality batches
    pub max_batches: usize,
    /// Pause between consecutive batch requests
    pub throttle: Duration,
}

impl Default for BackfillConfig {
    fn default() -> Self {
        Self {
            days: 365,
            batch_days: 90,
            max_batches: 5,
            throttle: Duration::from_secs(1),
        }
    }
}

impl BackfillConfig {
    /// Set the total days of history.
    pub fn days(mut self, days: i64) -> Self {
        self.days = days.max(1);
        self
    }

    /// Set the batch size in days.
    pub fn batch_days(mut self, batch_days: i64) -> Self {
        self.batch_days = batch_days.max(1);
        self
    }

    /// Set the batch safety cap.
    pub fn max_batches(mut self, max_batches: usize) -> Self {
        self.max_batches = max_batches.max(1);
        self
    }
}
