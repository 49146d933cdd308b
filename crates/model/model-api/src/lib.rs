//! Model Consumer API
//!
//! Configuration types for training consumers.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use model_spi::{Candidate, ModelError, ModelMetrics, Regressor, Result, TrainingReport};

/// Configuration for a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Portion of rows held out for evaluation.
    pub test_ratio: f64,
    /// Seed for the train/test shuffle.
    pub seed: u64,
    /// Candidate models to try, in order.
    pub candidates: Vec<Candidate>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            test_ratio: 0.2,
            seed: 42,
            candidates: Candidate::default_set(),
        }
    }
}

impl TrainConfig {
    /// Set the test ratio for the train/test split.
    pub fn test_ratio(mut self, ratio: f64) -> Self {
        self.test_ratio = ratio.clamp(0.1, 0.5);
        self
    }

    /// Set the shuffle seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the candidate set.
    pub fn candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = candidates;
        self
    }
}
