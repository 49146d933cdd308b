//! K-nearest-neighbours regression
//!
//! Memorises the training rows and predicts the inverse-distance
//! weighted average of the k closest targets. An exact feature match
//! returns that row's target directly.

use model_spi::{ModelError, Regressor, Result};
use serde::{Deserialize, Serialize};

/// Inverse-distance-weighted KNN regressor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnRegressor {
    k: usize,
    rows: Vec<Vec<f64>>,
    targets: Vec<f64>,
    fitted: bool,
}

impl KnnRegressor {
    /// Create a KNN regressor considering `k` neighbours.
    pub fn new(k: usize) -> Result<Self> {
        if k < 1 {
            return Err(ModelError::InvalidParameter {
                name: "k".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            k,
            rows: Vec::new(),
            targets: Vec::new(),
            fitted: false,
        })
    }

    fn distance(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl Regressor for KnnRegressor {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        if x.len() != y.len() || x.len() < self.k {
            return Err(ModelError::InsufficientData {
                required: self.k,
                actual: x.len().min(y.len()),
            });
        }
        let dims = x[0].len();
        if let Some(row) = x.iter().find(|row| row.len() != dims) {
            return Err(ModelError::DimensionMismatch {
                expected: dims,
                actual: row.len(),
            });
        }

        self.rows = x.to_vec();
        self.targets = y.to_vec();
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        if features.len() != self.rows[0].len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.rows[0].len(),
                actual: features.len(),
            });
        }

        let mut neighbours: Vec<(f64, f64)> = self
            .rows
            .iter()
            .zip(self.targets.iter())
            .map(|(row, &target)| (Self::distance(features, row), target))
            .collect();
        neighbours.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        neighbours.truncate(self.k);

        // Exact match short-circuits the weighting.
        if let Some(&(distance, target)) = neighbours.first() {
            if distance < 1e-12 {
                return Ok(target);
            }
        }

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for (distance, target) in neighbours {
            let weight = 1.0 / distance;
            weighted_sum += weight * target;
            weight_total += weight;
        }

        if weight_total == 0.0 {
            return Err(ModelError::NumericalError(
                "zero total neighbour weight".to_string(),
            ));
        }
        Ok(weighted_sum / weight_total)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
