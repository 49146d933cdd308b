//! Store Consumer API
//!
//! Configuration types for storage consumers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use store_spi::{FeatureStore, ModelRegistry, RegisteredModel, Result, StoreError};

/// Location of the local store's files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root directory holding features and model artifacts.
    pub root: PathBuf,
}

impl StoreConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding one JSON file per city.
    pub fn features_dir(&self) -> PathBuf {
        self.root.join("features")
    }

    /// Directory holding `<name>/<version>.json` model artifacts.
    pub fn models_dir(&self) -> PathBuf {
        self.root.join("models")
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Path::new("data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let config = StoreConfig::new("/var/lib/aqicast");
        assert_eq!(config.features_dir(), PathBuf::from("/var/lib/aqicast/features"));
        assert_eq!(config.models_dir(), PathBuf::from("/var/lib/aqicast/models"));
    }

    #[test]
    fn test_default_root() {
        assert_eq!(StoreConfig::default().root, PathBuf::from("data"));
    }
}
