//! Feature building
//!
//! Inner-joins the air-quality and weather series on exact timestamp
//! equality, derives the calendar and lag features, and emits rows in
//! strictly increasing time order. Hours present on only one side are
//! dropped silently; there is no interpolation and no tolerance window.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use data_spi::{HourlyRecord, HourlySeries};
use pipeline_api::FeatureConfig;
use pipeline_spi::{FeatureRow, PipelineError, Result};

const AIR_QUALITY_FIELDS: [&str; 7] = [
    "us_aqi",
    "pm10",
    "pm2_5",
    "carbon_monoxide",
    "nitrogen_dioxide",
    "sulphur_dioxide",
    "ozone",
];

const WEATHER_FIELDS: [&str; 4] = [
    "temperature_2m",
    "relative_humidity_2m",
    "wind_speed_10m",
    "precipitation",
];

/// Builds engineered feature rows from raw hourly series.
#[derive(Debug, Clone)]
pub struct FeatureBuilder {
    config: FeatureConfig,
}

impl FeatureBuilder {
    pub fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Join the two series and derive one feature row per overlapping hour.
    ///
    /// The first surviving row has no lag and is dropped, so a join with L
    /// overlapping hours yields L - 1 rows. Either series being empty, or
    /// the overlap being empty, yields an empty result — no data, not an
    /// error.
    pub fn build(
        &self,
        air_quality: &HourlySeries,
        weather: &HourlySeries,
    ) -> Result<Vec<FeatureRow>> {
        if air_quality.is_empty() || weather.is_empty() {
            tracing::warn!("one of the input series is empty, no features built");
            return Ok(Vec::new());
        }

        let weather_records = weather.records();
        let weather_by_time: BTreeMap<DateTime<Utc>, &HourlyRecord> =
            weather_records.iter().map(|r| (r.timestamp, r)).collect();

        // BTreeMap keying sorts and dedupes the joined hours
        let mut joined: BTreeMap<DateTime<Utc>, (HourlyRecord, HourlyRecord)> = BTreeMap::new();
        for aq_record in air_quality.records() {
            if let Some(wx_record) = weather_by_time.get(&aq_record.timestamp) {
                joined.insert(aq_record.timestamp, (aq_record, (*wx_record).clone()));
            }
        }

        if joined.is_empty() {
            tracing::warn!("no overlapping timestamps between air quality and weather");
            return Ok(Vec::new());
        }

        let mut rows = Vec::with_capacity(joined.len().saturating_sub(1));
        let mut previous_aqi: Option<f64> = None;

        for (timestamp, (aq_record, wx_record)) in joined {
            let aqi = require(&aq_record, "us_aqi")?;

            // Lag comes from the nearest earlier surviving row; the first
            // row has none and is dropped.
            let Some(aqi_lag1) = previous_aqi.replace(aqi) else {
                continue;
            };

            let mut row = FeatureRow {
                city: self.config.city.clone(),
                timestamp,
                aqi,
                aqi_lag1,
                aqi_change_rate: (aqi - aqi_lag1) / (aqi_lag1 + self.config.epsilon),
                hour: 0,
                day: 0,
                month: 0,
                dayofweek: 0,
                temperature_2m: require(&wx_record, "temperature_2m")?,
                relative_humidity_2m: require(&wx_record, "relative_humidity_2m")?,
                wind_speed_10m: require(&wx_record, "wind_speed_10m")?,
                precipitation: require(&wx_record, "precipitation")?,
                pm10: require(&aq_record, "pm10")?,
                pm2_5: require(&aq_record, "pm2_5")?,
                carbon_monoxide: require(&aq_record, "carbon_monoxide")?,
                nitrogen_dioxide: require(&aq_record, "nitrogen_dioxide")?,
                sulphur_dioxide: require(&aq_record, "sulphur_dioxide")?,
                ozone: require(&aq_record, "ozone")?,
            };
            row.apply_calendar(timestamp);
            rows.push(row);
        }

        tracing::info!(rows = rows.len(), city = %self.config.city, "features built");
        Ok(rows)
    }
}

/// Expected field sets, exposed so callers can validate requests up front.
pub fn expected_air_quality_fields() -> &'static [&'static str] {
    &AIR_QUALITY_FIELDS
}

pub fn expected_weather_fields() -> &'static [&'static str] {
    &WEATHER_FIELDS
}

fn require(record: &HourlyRecord, field: &str) -> Result<f64> {
    record.get(field).ok_or_else(|| PipelineError::MissingField {
        field: field.to_string(),
        timestamp: record.timestamp.to_rfc3339(),
    })
}
