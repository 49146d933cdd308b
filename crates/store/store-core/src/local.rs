//! File-backed store and registry
//!
//! Features live in one JSON document per city, a map from unix
//! timestamp to row, so re-inserting a key overwrites in place. Model
//! artifacts live under `models/<name>/<version>.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use model_spi::TrainingReport;
use pipeline_spi::FeatureRow;
use store_api::StoreConfig;
use store_spi::{FeatureStore, ModelRegistry, RegisteredModel, Result, StoreError};
use tracing::info;

/// File name fragment for a city, lowercase with non-alphanumerics
/// collapsed to underscores.
fn city_slug(city: &str) -> String {
    city.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Feature rows stored as one JSON map per city.
#[derive(Debug, Clone)]
pub struct LocalFeatureStore {
    dir: PathBuf,
}

impl LocalFeatureStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            dir: config.features_dir(),
        }
    }

    fn city_path(&self, city: &str) -> PathBuf {
        self.dir.join(format!("{}.json", city_slug(city)))
    }

    fn load_city(&self, city: &str) -> Result<BTreeMap<i64, FeatureRow>> {
        let path = self.city_path(city);
        match fs::read(&path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error.into()),
        }
    }

    fn save_city(&self, city: &str, rows: &BTreeMap<i64, FeatureRow>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let bytes = serde_json::to_vec_pretty(rows)?;
        fs::write(self.city_path(city), bytes)?;
        Ok(())
    }
}

impl FeatureStore for LocalFeatureStore {
    fn insert(&self, rows: &[FeatureRow]) -> Result<usize> {
        let mut by_city: BTreeMap<&str, Vec<&FeatureRow>> = BTreeMap::new();
        for row in rows {
            by_city.entry(row.city.as_str()).or_default().push(row);
        }

        for (city, city_rows) in by_city {
            let mut stored = self.load_city(city)?;
            for row in city_rows {
                stored.insert(row.timestamp_unix(), row.clone());
            }
            self.save_city(city, &stored)?;
            info!(city, total = stored.len(), "feature rows written");
        }
        Ok(rows.len())
    }

    fn read_all(&self, city: &str) -> Result<Vec<FeatureRow>> {
        // BTreeMap keys give ascending timestamp order for free.
        Ok(self.load_city(city)?.into_values().collect())
    }

    fn read_latest(&self, city: &str) -> Result<FeatureRow> {
        self.load_city(city)?
            .into_values()
            .last()
            .ok_or(StoreError::NoData)
    }
}

/// Model artifacts stored as `models/<name>/<version>.json`.
#[derive(Debug, Clone)]
pub struct LocalModelRegistry {
    dir: PathBuf,
}

impl LocalModelRegistry {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            dir: config.models_dir(),
        }
    }

    fn version_path(&self, name: &str, version: u32) -> PathBuf {
        self.dir.join(name).join(format!("{version}.json"))
    }

    fn versions(&self, name: &str) -> Result<Vec<u32>> {
        let dir = self.dir.join(name);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };

        let mut versions = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let stem = path.file_stem().and_then(|s| s.to_str());
            if let Some(version) = stem.and_then(|s| s.parse::<u32>().ok()) {
                versions.push(version);
            }
        }
        versions.sort_unstable();
        Ok(versions)
    }
}

impl ModelRegistry for LocalModelRegistry {
    fn create(
        &self,
        name: &str,
        artifact: serde_json::Value,
        report: &TrainingReport,
    ) -> Result<u32> {
        let version = self.versions(name)?.last().copied().unwrap_or(0) + 1;
        let model = RegisteredModel {
            name: name.to_string(),
            version,
            artifact,
            report: report.clone(),
        };

        fs::create_dir_all(self.dir.join(name))?;
        let bytes = serde_json::to_vec_pretty(&model)?;
        fs::write(self.version_path(name, version), bytes)?;
        info!(name, version, "model registered");
        Ok(version)
    }

    fn get(&self, name: &str, version: u32) -> Result<RegisteredModel> {
        match fs::read(self.version_path(name, version)) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound {
                    name: name.to_string(),
                    version,
                })
            }
            Err(error) => Err(error.into()),
        }
    }

    fn latest_version(&self, name: &str) -> Result<u32> {
        self.versions(name)?
            .last()
            .copied()
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
                version: 0,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use model_spi::{Candidate, ModelMetrics};

    fn config(dir: &tempfile::TempDir) -> StoreConfig {
        StoreConfig::new(dir.path())
    }

    fn row(city: &str, hour: u32, aqi: f64) -> FeatureRow {
        let timestamp = Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap();
        let mut row = FeatureRow {
            city: city.to_string(),
            timestamp,
            aqi,
            aqi_lag1: aqi - 2.0,
            aqi_change_rate: 0.02,
            hour: 0,
            day: 0,
            month: 0,
            dayofweek: 0,
            temperature_2m: 30.0,
            relative_humidity_2m: 55.0,
            wind_speed_10m: 10.0,
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

    fn report() -> TrainingReport {
        TrainingReport {
            candidate: Candidate::Ridge { alpha: 1.0 },
            metrics: ModelMetrics {
                rmse: 9.0,
                mae: 7.0,
                r2: 0.9,
            },
            all_scores: vec![],
            train_rows: 80,
            test_rows: 20,
        }
    }

    #[test]
    fn test_city_slug() {
        assert_eq!(city_slug("Karachi"), "karachi");
        assert_eq!(city_slug("New York"), "new_york");
    }

    #[test]
    fn test_insert_and_read_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFeatureStore::new(&config(&dir));

        // Insert out of order; reads come back ascending.
        store
            .insert(&[row("Karachi", 3, 110.0), row("Karachi", 1, 100.0)])
            .unwrap();
        store.insert(&[row("Karachi", 2, 105.0)]).unwrap();

        let rows = store.read_all("Karachi").unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.windows(2).all(|p| p[0].timestamp < p[1].timestamp));
    }

    #[test]
    fn test_reinsert_overwrites_by_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFeatureStore::new(&config(&dir));

        store.insert(&[row("Karachi", 1, 100.0)]).unwrap();
        store.insert(&[row("Karachi", 1, 140.0)]).unwrap();

        let rows = store.read_all("Karachi").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].aqi, 140.0);
    }

    #[test]
    fn test_read_latest() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFeatureStore::new(&config(&dir));

        assert!(matches!(
            store.read_latest("Karachi"),
            Err(StoreError::NoData)
        ));

        store
            .insert(&[row("Karachi", 1, 100.0), row("Karachi", 5, 130.0)])
            .unwrap();
        assert_eq!(store.read_latest("Karachi").unwrap().aqi, 130.0);
    }

    #[test]
    fn test_unknown_city_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFeatureStore::new(&config(&dir));
        assert!(store.read_all("Lahore").unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_city_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFeatureStore::new(&config(&dir));

        fs::create_dir_all(dir.path().join("features")).unwrap();
        fs::write(dir.path().join("features/karachi.json"), b"not json").unwrap();

        assert!(matches!(
            store.read_all("Karachi"),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn test_registry_versions_increment() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalModelRegistry::new(&config(&dir));

        let artifact = serde_json::json!({"kind": "stub"});
        assert_eq!(
            registry.create("aqi_forecaster", artifact.clone(), &report()).unwrap(),
            1
        );
        assert_eq!(
            registry.create("aqi_forecaster", artifact, &report()).unwrap(),
            2
        );
        assert_eq!(registry.latest_version("aqi_forecaster").unwrap(), 2);
    }

    #[test]
    fn test_registry_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalModelRegistry::new(&config(&dir));

        let artifact = serde_json::json!({"weights": [1.0, 2.0]});
        let version = registry
            .create("aqi_forecaster", artifact.clone(), &report())
            .unwrap();

        let model = registry.get("aqi_forecaster", version).unwrap();
        assert_eq!(model.name, "aqi_forecaster");
        assert_eq!(model.artifact, artifact);
        assert!(matches!(model.report.candidate, Candidate::Ridge { .. }));
    }

    #[test]
    fn test_registry_missing_model_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalModelRegistry::new(&config(&dir));

        assert!(matches!(
            registry.get("missing", 1),
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            registry.latest_version("missing"),
            Err(StoreError::NotFound { .. })
        ));
    }
}
