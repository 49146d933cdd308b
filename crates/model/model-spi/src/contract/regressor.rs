//! Regressor trait implemented by every model family.

use crate::Result;

/// A supervised regression model over fixed-width feature vectors.
///
/// `fit` consumes a design matrix (one row per observation) and its
/// targets; `predict` scores a single feature vector of the same width.
pub trait Regressor: Send + Sync {
    /// Fit the model to the training data.
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()>;

    /// Predict the target for a single feature vector.
    fn predict(&self, features: &[f64]) -> Result<f64>;

    /// Whether `fit` has completed successfully.
    fn is_fitted(&self) -> bool;
}
