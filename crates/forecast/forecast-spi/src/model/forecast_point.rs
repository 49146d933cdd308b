//! A single predicted hour.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One hour of the forecast: the instant and its rounded AQI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub aqi: i64,
}
