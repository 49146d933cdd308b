//! Request model for hourly data sources.

use serde::{Deserialize, Serialize};

/// Geographic coordinates of the observed city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Time range of an hourly request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HourlyRange {
    /// The next N days of provider forecast data, starting today
    ForecastDays(u8),
    /// A historical window, dates in `YYYY-MM-DD`
    Dates { start: String, end: String },
}

/// A request for hourly columns from a data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRequest {
    /// Where to observe
    pub location: Location,
    /// Which hourly variables to request (provider field names)
    pub variables: Vec<String>,
    /// Time range to cover
    pub range: HourlyRange,
    /// IANA timezone the provider should align the hourly axis to
    pub timezone: String,
}

impl HourlyRequest {
    /// Create a request for the given variables over the given range.
    pub fn new(location: Location, variables: &[&str], range: HourlyRange) -> Self {
        Self {
            location,
            variables: variables.iter().map(|v| v.to_string()).collect(),
            range,
            timezone: "UTC".to_string(),
        }
    }

    /// Set the timezone for the hourly axis.
    pub fn with_timezone(mut self, timezone: &str) -> Self {
        self.timezone = timezone.to_string();
        self
    }

    /// The comma-separated variable list as providers expect it.
    pub fn variables_param(&self) -> String {
        self.variables.join(",")
    }
}
