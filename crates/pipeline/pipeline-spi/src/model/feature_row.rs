//! The engineered feature row.
//!
//! One row per observed hour. The model never sees the row itself, only the
//! vector produced by [`FeatureRow::feature_vector`], whose layout is pinned
//! by [`FEATURE_COLUMNS`]. Training and forecasting both go through that one
//! method, so the feature set and its order cannot drift between them.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Canonical order of the model features.
///
/// Everything in the row except identity (`city`, `timestamp`) and the
/// target (`aqi`).
pub const FEATURE_COLUMNS: [&str; 16] = [
    "aqi_lag1",
    "aqi_change_rate",
    "hour",
    "day",
    "month",
    "dayofweek",
    "temperature_2m",
    "relative_humidity_2m",
    "wind_speed_10m",
    "precipitation",
    "pm10",
    "pm2_5",
    "carbon_monoxide",
    "nitrogen_dioxide",
    "sulphur_dioxide",
    "ozone",
];

/// One hour of engineered features for a single city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// City the observation belongs to
    pub city: String,
    /// Hour of the observation
    pub timestamp: DateTime<Utc>,

    /// Current US AQI, the forecast target (integer-valued)
    pub aqi: f64,
    /// AQI of the previous surviving row
    pub aqi_lag1: f64,
    /// Relative AQI delta: (aqi - aqi_lag1) / (aqi_lag1 + epsilon)
    pub aqi_change_rate: f64,

    /// Hour of day, 0-23
    pub hour: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// Month, 1-12
    pub month: u32,
    /// Day of week, Monday = 0
    pub dayofweek: u32,

    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    pub precipitation: f64,

    pub pm10: f64,
    pub pm2_5: f64,
    pub carbon_monoxide: f64,
    pub nitrogen_dioxide: f64,
    pub sulphur_dioxide: f64,
    pub ozone: f64,
}

impl FeatureRow {
    /// Unix timestamp of the observation, the event-time half of the
    /// store's `(city, timestamp_unix)` key.
    pub fn timestamp_unix(&self) -> i64 {
        self.timestamp.timestamp()
    }

    /// Overwrite the calendar-derived fields from a new instant.
    ///
    /// Used by the forecaster when projecting this row onto future hours.
    pub fn apply_calendar(&mut self, t: DateTime<Utc>) {
        self.hour = t.hour();
        self.day = t.day();
        self.month = t.month();
        self.dayofweek = t.weekday().num_days_from_monday();
    }

    /// The model input vector, in [`FEATURE_COLUMNS`] order.
    pub fn feature_vector(&self) -> Vec<f64> {
        vec![
            self.aqi_lag1,
            self.aqi_change_rate,
            self.hour as f64,
            self.day as f64,
            self.month as f64,
            self.dayofweek as f64,
            self.temperature_2m,
            self.relative_humidity_2m,
            self.wind_speed_10m,
            self.precipitation,
            self.pm10,
            self.pm2_5,
            self.carbon_monoxide,
            self.nitrogen_dioxide,
            self.sulphur_dioxide,
            self.ozone,
        ]
    }
}
