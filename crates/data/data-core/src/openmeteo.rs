//! Open-Meteo data source
//!
//! Fetches hourly air-quality and weather series from the Open-Meteo APIs.
//! Three endpoints are involved: the air-quality API (live and historical
//! pollutants + US AQI), the forecast API (live weather), and the archive
//! API (historical weather). Requests are blocking; the whole ingestion
//! pipeline is synchronous.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use data_spi::{DataError, HourlyRange, HourlyRequest, HourlySeries, HourlySource, Result};

const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Hourly timestamps come back as local time without an offset.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Open-Meteo API response envelope.
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    hourly: Option<HourlyBlock>,
}

/// The `hourly` block: a time axis plus one array per requested variable.
#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    #[serde(flatten)]
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

/// Open-Meteo client.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    air_quality_url: String,
    forecast_url: String,
    archive_url: String,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoClient {
    /// Create a client against the production Open-Meteo endpoints.
    pub fn new() -> Self {
        Self {
            air_quality_url: AIR_QUALITY_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
            archive_url: ARCHIVE_URL.to_string(),
        }
    }

    /// Override all three endpoint URLs. Used to point tests at a stub server.
    pub fn with_base_urls(air_quality: &str, forecast: &str, archive: &str) -> Self {
        Self {
            air_quality_url: air_quality.to_string(),
            forecast_url: forecast.to_string(),
            archive_url: archive.to_string(),
        }
    }

    /// Build the request URL for an endpoint.
    fn build_url(&self, base: &str, request: &HourlyRequest) -> Result<String> {
        let range = match &request.range {
            HourlyRange::ForecastDays(days) => format!("forecast_days={}", days),
            HourlyRange::Dates { start, end } => {
                validate_date(start)?;
                validate_date(end)?;
                format!("start_date={}&end_date={}", start, end)
            }
        };
        Ok(format!(
            "{}?latitude={}&longitude={}&hourly={}&timezone={}&{}",
            base,
            request.location.latitude,
            request.location.longitude,
            request.variables_param(),
            request.timezone,
            range
        ))
    }

    /// Perform one blocking GET and parse the hourly block.
    fn fetch(&self, base: &str, request: &HourlyRequest) -> Result<HourlySeries> {
        let url = self.build_url(base, request)?;
        let response = reqwest::blocking::get(&url)
            .map_err(|e| DataError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| DataError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%status, url, "open-meteo returned non-success, treating as no data");
            return Ok(HourlySeries::empty());
        }

        self.parse_response(&body)
    }

    /// Parse an Open-Meteo response body into a series.
    fn parse_response(&self, body: &str) -> Result<HourlySeries> {
        let response: OpenMeteoResponse =
            serde_json::from_str(body).map_err(|e| DataError::ParseError(e.to_string()))?;

        let Some(hourly) = response.hourly else {
            tracing::warn!("open-meteo response has no hourly block, treating as no data");
            return Ok(HourlySeries::empty());
        };

        let mut time = Vec::with_capacity(hourly.time.len());
        for t in &hourly.time {
            let parsed = chrono::NaiveDateTime::parse_from_str(t, TIME_FORMAT)
                .map_err(|e| DataError::ParseError(format!("bad timestamp '{}': {}", t, e)))?;
            time.push(parsed.and_utc());
        }

        HourlySeries::new(time, hourly.columns)
    }
}

impl HourlySource for OpenMeteoClient {
    fn name(&self) -> &str {
        "open-meteo"
    }

    fn fetch_air_quality(&self, request: &HourlyRequest) -> Result<HourlySeries> {
        self.fetch(&self.air_quality_url, request)
    }

    fn fetch_weather(&self, request: &HourlyRequest) -> Result<HourlySeries> {
        // Live weather comes from the forecast endpoint, history from the archive
        let base = match request.range {
            HourlyRange::ForecastDays(_) => &self.forecast_url,
            HourlyRange::Dates { .. } => &self.archive_url,
        };
        self.fetch(base, request)
    }
}

fn validate_date(date: &str) -> Result<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| DataError::InvalidDate(date.to_string()))
}
