//! End-to-end tests: train a real model, then forecast with it

use chrono::{DateTime, Duration, TimeZone, Utc};
use forecast_facade::prelude::*;
use model_facade::prelude::*;
use pipeline_spi::FeatureRow;

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn row_at(timestamp: DateTime<Utc>, aqi: f64, lag: f64) -> FeatureRow {
    let mut row = FeatureRow {
        city: "Karachi".to_string(),
        timestamp,
        aqi,
        aqi_lag1: lag,
        aqi_change_rate: 0.0,
        hour: 0,
        day: 0,
        month: 0,
        dayofweek: 0,
        temperature_2m: 31.0,
        relative_humidity_2m: 60.0,
        wind_speed_10m: 12.0,
        precipitation: 0.0,
        pm10: 80.0,
        pm2_5: 45.0,
        carbon_monoxide: 300.0,
        nitrogen_dioxide: 20.0,
        sulphur_dioxide: 8.0,
        ozone: 50.0,
    };
    row.apply_calendar(timestamp);
    row
}

/// A smooth synthetic AQI history on an hourly axis.
fn history(n: usize) -> Vec<FeatureRow> {
    let start = noon() - Duration::hours(n as i64);
    let mut aqi_values: Vec<f64> = Vec::with_capacity(n);
    for i in 0..n {
        let hour = (i % 24) as f64;
        aqi_values.push(100.0 + 20.0 * (hour * std::f64::consts::PI / 12.0).sin());
    }

    (1..n)
        .map(|i| {
            row_at(
                start + Duration::hours(i as i64),
                aqi_values[i],
                aqi_values[i - 1],
            )
        })
        .collect()
}

#[test]
fn test_trained_model_drives_a_full_horizon() {
    let rows = history(24 * 14);
    let x: Vec<Vec<f64>> = rows.iter().map(|r| r.feature_vector()).collect();
    let y: Vec<f64> = rows.iter().map(|r| r.aqi).collect();

    let outcome = ModelTrainer::with_defaults().train(&x, &y).unwrap();
    let base = rows.last().unwrap();

    let forecaster = Forecaster::with_defaults();
    let points = forecaster.forecast(&outcome.model, base, noon()).unwrap();

    assert_eq!(points.len(), 72);
    assert_eq!(points[0].timestamp, noon() + Duration::hours(1));
    for pair in points.windows(2) {
        assert!(pair[1].timestamp > pair[0].timestamp);
    }
    // Predictions stay in the neighbourhood of the training range.
    for point in &points {
        assert!(point.aqi > 0 && point.aqi < 500);
    }
}

#[test]
fn test_forecast_is_reproducible_across_calls() {
    let rows = history(24 * 7);
    let x: Vec<Vec<f64>> = rows.iter().map(|r| r.feature_vector()).collect();
    let y: Vec<f64> = rows.iter().map(|r| r.aqi).collect();
    let outcome = ModelTrainer::with_defaults().train(&x, &y).unwrap();

    let forecaster = Forecaster::new(ForecastConfig::default().horizon(24));
    let base = rows.last().unwrap();
    let first = forecaster.forecast(&outcome.model, base, noon()).unwrap();
    let second = forecaster.forecast(&outcome.model, base, noon()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_forecast_points_band_into_severities() {
    let rows = history(24 * 7);
    let x: Vec<Vec<f64>> = rows.iter().map(|r| r.feature_vector()).collect();
    let y: Vec<f64> = rows.iter().map(|r| r.aqi).collect();
    let outcome = ModelTrainer::with_defaults().train(&x, &y).unwrap();

    let forecaster = Forecaster::new(ForecastConfig::default().horizon(12));
    let points = forecaster
        .forecast(&outcome.model, rows.last().unwrap(), noon())
        .unwrap();

    for point in points {
        let severity = Severity::from_aqi(point.aqi);
        assert!(severity.index() < 6);
        assert!(!severity.label().is_empty());
    }
}
