//! Map-backed feature store.

use std::collections::BTreeMap;
use std::sync::Mutex;

use pipeline_spi::FeatureRow;
use store_spi::{FeatureStore, Result, StoreError};

/// In-memory [`FeatureStore`] for tests and demos. Same keying and
/// ordering semantics as the file-backed store, nothing persisted.
#[derive(Debug, Default)]
pub struct InMemoryFeatureStore {
    rows: Mutex<BTreeMap<(String, i64), FeatureRow>>,
}

impl InMemoryFeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<(String, i64), FeatureRow>> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FeatureStore for InMemoryFeatureStore {
    fn insert(&self, rows: &[FeatureRow]) -> Result<usize> {
        let mut map = self.lock();
        for row in rows {
            map.insert((row.city.clone(), row.timestamp_unix()), row.clone());
        }
        Ok(rows.len())
    }

    fn read_all(&self, city: &str) -> Result<Vec<FeatureRow>> {
        let map = self.lock();
        Ok(map
            .range((city.to_string(), i64::MIN)..=(city.to_string(), i64::MAX))
            .map(|(_, row)| row.clone())
            .collect())
    }

    fn read_latest(&self, city: &str) -> Result<FeatureRow> {
        self.read_all(city)?
            .into_iter()
            .last()
            .ok_or(StoreError::NoData)
    }
}
