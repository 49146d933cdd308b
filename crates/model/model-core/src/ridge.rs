//! Ridge regression
//!
//! L2-regularised linear regression solved by normal equations. The
//! intercept is left unpenalised, matching the usual convention.

use model_spi::{ModelError, Regressor, Result};
use serde::{Deserialize, Serialize};

/// Linear regressor with an L2 penalty on the weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RidgeRegression {
    alpha: f64,
    /// Weights, intercept first. `None` until fitted.
    weights: Option<Vec<f64>>,
}

impl RidgeRegression {
    /// Create a ridge regressor with the given penalty strength.
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(ModelError::InvalidParameter {
                name: "alpha".to_string(),
                reason: "must be a non-negative number".to_string(),
            });
        }
        Ok(Self {
            alpha,
            weights: None,
        })
    }

    /// Solve `a * x = b` in place by Gaussian elimination with partial pivoting.
    fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
        let n = b.len();
        for col in 0..n {
            let pivot = (col..n)
                .max_by(|&i, &j| {
                    a[i][col]
                        .abs()
                        .partial_cmp(&a[j][col].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .ok_or_else(|| ModelError::NumericalError("empty system".to_string()))?;

            if a[pivot][col].abs() < 1e-12 {
                return Err(ModelError::NumericalError(
                    "singular normal equations matrix".to_string(),
                ));
            }

            a.swap(col, pivot);
            b.swap(col, pivot);

            for row in (col + 1)..n {
                let factor = a[row][col] / a[col][col];
                for k in col..n {
                    a[row][k] -= factor * a[col][k];
                }
                b[row] -= factor * b[col];
            }
        }

        let mut x = vec![0.0; n];
        for col in (0..n).rev() {
            let mut sum = b[col];
            for k in (col + 1)..n {
                sum -= a[col][k] * x[k];
            }
            x[col] = sum / a[col][col];
        }
        Ok(x)
    }
}

impl Regressor for RidgeRegression {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        if x.len() != y.len() || x.len() < 2 {
            return Err(ModelError::InsufficientData {
                required: 2,
                actual: x.len().min(y.len()),
            });
        }
        let dims = x[0].len();
        if dims == 0 {
            return Err(ModelError::InvalidParameter {
                name: "x".to_string(),
                reason: "feature vectors must not be empty".to_string(),
            });
        }
        if let Some(row) = x.iter().find(|row| row.len() != dims) {
            return Err(ModelError::DimensionMismatch {
                expected: dims,
                actual: row.len(),
            });
        }

        // Normal equations over the intercept-augmented design matrix,
        // with the penalty applied to every weight except the intercept.
        let width = dims + 1;
        let mut xtx = vec![vec![0.0; width]; width];
        let mut xty = vec![0.0; width];

        for (row, &target) in x.iter().zip(y.iter()) {
            let mut augmented = Vec::with_capacity(width);
            augmented.push(1.0);
            augmented.extend_from_slice(row);

            for i in 0..width {
                xty[i] += augmented[i] * target;
                for j in 0..width {
                    xtx[i][j] += augmented[i] * augmented[j];
                }
            }
        }

        for (i, row) in xtx.iter_mut().enumerate().skip(1) {
            row[i] += self.alpha;
        }

        let weights = Self::solve(xtx, xty)?;
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::NumericalError(
                "non-finite weights from normal equations".to_string(),
            ));
        }

        self.weights = Some(weights);
        Ok(())
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        let weights = self.weights.as_ref().ok_or(ModelError::NotFitted)?;
        if features.len() != weights.len() - 1 {
            return Err(ModelError::DimensionMismatch {
                expected: weights.len() - 1,
                actual: features.len(),
            });
        }

        let mut prediction = weights[0];
        for (w, f) in weights[1..].iter().zip(features.iter()) {
            prediction += w * f;
        }
        Ok(prediction)
    }

    fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }
}
