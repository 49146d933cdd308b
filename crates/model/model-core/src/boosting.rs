//! Gradient boosting
//!
//! Additive ensemble of regression trees fitted to squared-error
//! residuals. Starts from the target mean and applies each tree's
//! correction scaled by the learning rate.

use model_spi::{ModelError, Regressor, Result};
use serde::{Deserialize, Serialize};

use crate::tree::RegressionTree;

/// Boosted regression trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoosting {
    n_estimators: usize,
    learning_rate: f64,
    max_depth: usize,
    base_prediction: f64,
    trees: Vec<RegressionTree>,
    fitted: bool,
}

impl GradientBoosting {
    /// Create a boosting ensemble.
    pub fn new(n_estimators: usize, learning_rate: f64, max_depth: usize) -> Result<Self> {
        if n_estimators == 0 {
            return Err(ModelError::InvalidParameter {
                name: "n_estimators".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 || learning_rate > 1.0 {
            return Err(ModelError::InvalidParameter {
                name: "learning_rate".to_string(),
                reason: "must be in (0, 1]".to_string(),
            });
        }
        if max_depth == 0 {
            return Err(ModelError::InvalidParameter {
                name: "max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            n_estimators,
            learning_rate,
            max_depth,
            base_prediction: 0.0,
            trees: Vec::new(),
            fitted: false,
        })
    }
}

impl Regressor for GradientBoosting {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        if x.len() != y.len() || x.len() < 2 {
            return Err(ModelError::InsufficientData {
                required: 2,
                actual: x.len().min(y.len()),
            });
        }

        self.base_prediction = y.iter().sum::<f64>() / y.len() as f64;
        self.trees = Vec::with_capacity(self.n_estimators);

        let mut predictions = vec![self.base_prediction; y.len()];
        let mut residuals = vec![0.0; y.len()];

        for _ in 0..self.n_estimators {
            for (r, (&target, &current)) in
                residuals.iter_mut().zip(y.iter().zip(predictions.iter()))
            {
                *r = target - current;
            }

            // All residuals zero means the ensemble already fits exactly.
            if residuals.iter().all(|r| r.abs() < 1e-12) {
                break;
            }

            let mut tree = RegressionTree::new(self.max_depth)?;
            tree.fit(x, &residuals)?;

            for (current, row) in predictions.iter_mut().zip(x.iter()) {
                *current += self.learning_rate * tree.predict(row)?;
            }
            self.trees.push(tree);
        }

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }

        let mut prediction = self.base_prediction;
        for tree in &self.trees {
            prediction += self.learning_rate * tree.predict(features)?;
        }
        Ok(prediction)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
