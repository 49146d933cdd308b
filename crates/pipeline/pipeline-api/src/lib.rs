//! Feature Pipeline Consumer API
//!
//! Configuration types for consumers of the feature builder.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use pipeline_spi::{FeatureRow, PipelineError, Result, FEATURE_COLUMNS};

/// Configuration for feature building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// City label stamped on every row
    pub city: String,
    /// Guard added to the lag denominator of the change rate
    pub epsilon: f64,
}

impl FeatureConfig {
    /// Create a configuration for the given city with the default epsilon.
    pub fn new(city: &str) -> Self {
        Self {
            city: city.to_string(),
            epsilon: 1e-6,
        }
    }

    /// Override the change-rate epsilon.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_config_defaults() {
        let config = FeatureConfig::new("Karachi");
        assert_eq!(config.city, "Karachi");
        assert_eq!(config.epsilon, 1e-6);
    }

    #[test]
    fn test_feature_config_epsilon_override() {
        let config = FeatureConfig::new("Karachi").epsilon(1e-9);
        assert_eq!(config.epsilon, 1e-9);
    }
}
