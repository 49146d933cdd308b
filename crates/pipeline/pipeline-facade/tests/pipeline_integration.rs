//! Integration tests for the feature pipeline

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use data_spi::HourlySeries;
use pipeline_facade::prelude::*;

fn hour(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, h, 0, 0).unwrap()
}

fn full_air_quality(hours: &[u32], aqi: &[f64]) -> HourlySeries {
    let mut columns = BTreeMap::new();
    columns.insert("us_aqi".to_string(), aqi.iter().map(|&v| Some(v)).collect());
    for field in [
        "pm10",
        "pm2_5",
        "carbon_monoxide",
        "nitrogen_dioxide",
        "sulphur_dioxide",
        "ozone",
    ] {
        columns.insert(field.to_string(), vec![Some(2.0); hours.len()]);
    }
    HourlySeries::new(hours.iter().map(|&h| hour(h)).collect(), columns).unwrap()
}

fn full_weather(hours: &[u32]) -> HourlySeries {
    let mut columns = BTreeMap::new();
    for field in [
        "temperature_2m",
        "relative_humidity_2m",
        "wind_speed_10m",
        "precipitation",
    ] {
        columns.insert(field.to_string(), vec![Some(25.0); hours.len()]);
    }
    HourlySeries::new(hours.iter().map(|&h| hour(h)).collect(), columns).unwrap()
}

#[test]
fn test_output_length_is_overlap_minus_one() {
    let builder = FeatureBuilder::new(FeatureConfig::new("Karachi"));

    for overlap in 2..6u32 {
        let hours: Vec<u32> = (0..overlap).collect();
        let aqi: Vec<f64> = hours.iter().map(|&h| 100.0 + h as f64).collect();
        let rows = builder
            .build(&full_air_quality(&hours, &aqi), &full_weather(&hours))
            .unwrap();
        assert_eq!(rows.len(), (overlap - 1) as usize);
    }
}

#[test]
fn test_rows_feed_the_model_contract() {
    let builder = FeatureBuilder::new(FeatureConfig::new("Karachi"));
    let rows = builder
        .build(
            &full_air_quality(&[0, 1, 2], &[100.0, 105.0, 110.0]),
            &full_weather(&[0, 1, 2]),
        )
        .unwrap();

    for row in &rows {
        assert_eq!(row.city, "Karachi");
        let vector = row.feature_vector();
        assert_eq!(vector.len(), FEATURE_COLUMNS.len());
        assert!(vector.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_disjoint_series_is_no_data_not_error() {
    let builder = FeatureBuilder::new(FeatureConfig::new("Karachi"));
    let rows = builder
        .build(
            &full_air_quality(&[0, 1], &[100.0, 105.0]),
            &full_weather(&[10, 11]),
        )
        .unwrap();
    assert!(rows.is_empty());
}
