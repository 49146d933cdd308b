//! Regression trees
//!
//! CART-style binary trees that greedily minimise squared error. Used as
//! the weak learner inside [`crate::GradientBoosting`].

use model_spi::{ModelError, Regressor, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// A depth-limited binary regression tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    max_depth: usize,
    min_samples_split: usize,
    root: Option<Node>,
}

impl RegressionTree {
    /// Create a tree limited to `max_depth` levels of splits.
    pub fn new(max_depth: usize) -> Result<Self> {
        if max_depth == 0 {
            return Err(ModelError::InvalidParameter {
                name: "max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            max_depth,
            min_samples_split: 2,
            root: None,
        })
    }

    fn mean(y: &[f64], indices: &[usize]) -> f64 {
        indices.iter().map(|&i| y[i]).sum::<f64>() / indices.len() as f64
    }

    /// Find the split of `indices` that most reduces squared error.
    /// Returns `(feature, threshold, left, right)` or `None` when no
    /// split separates the rows.
    fn best_split(
        x: &[Vec<f64>],
        y: &[f64],
        indices: &[usize],
    ) -> Option<(usize, f64, Vec<usize>, Vec<usize>)> {
        let dims = x[indices[0]].len();
        let total_sum: f64 = indices.iter().map(|&i| y[i]).sum();
        let total_sq: f64 = indices.iter().map(|&i| y[i] * y[i]).sum();
        let n = indices.len() as f64;
        let parent_sse = total_sq - total_sum * total_sum / n;

        let mut best: Option<(f64, usize, f64)> = None;

        for feature in 0..dims {
            let mut sorted: Vec<usize> = indices.to_vec();
            sorted.sort_by(|&a, &b| {
                x[a][feature]
                    .partial_cmp(&x[b][feature])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let mut left_sum = 0.0;
            let mut left_sq = 0.0;
            for (count, window) in sorted.windows(2).enumerate() {
                let value = y[window[0]];
                left_sum += value;
                left_sq += value * value;

                let (lo, hi) = (x[window[0]][feature], x[window[1]][feature]);
                if lo == hi {
                    continue;
                }

                let left_n = (count + 1) as f64;
                let right_n = n - left_n;
                let right_sum = total_sum - left_sum;
                let right_sq = total_sq - left_sq;
                let sse = (left_sq - left_sum * left_sum / left_n)
                    + (right_sq - right_sum * right_sum / right_n);

                if best.map_or(sse < parent_sse - 1e-12, |(b, _, _)| sse < b) {
                    best = Some((sse, feature, (lo + hi) / 2.0));
                }
            }
        }

        let (_, feature, threshold) = best?;
        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .partition(|&&i| x[i][feature] <= threshold);
        Some((feature, threshold, left, right))
    }

    fn build(x: &[Vec<f64>], y: &[f64], indices: &[usize], depth: usize, max_depth: usize) -> Node {
        if depth >= max_depth || indices.len() < 2 {
            return Node::Leaf {
                value: Self::mean(y, indices),
            };
        }

        match Self::best_split(x, y, indices) {
            Some((feature, threshold, left, right)) => Node::Split {
                feature,
                threshold,
                left: Box::new(Self::build(x, y, &left, depth + 1, max_depth)),
                right: Box::new(Self::build(x, y, &right, depth + 1, max_depth)),
            },
            None => Node::Leaf {
                value: Self::mean(y, indices),
            },
        }
    }
}

impl Regressor for RegressionTree {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        if x.len() != y.len() || x.len() < self.min_samples_split {
            return Err(ModelError::InsufficientData {
                required: self.min_samples_split,
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

        let indices: Vec<usize> = (0..x.len()).collect();
        self.root = Some(Self::build(x, y, &indices, 0, self.max_depth));
        Ok(())
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        let mut node = self.root.as_ref().ok_or(ModelError::NotFitted)?;
        loop {
            match node {
                Node::Leaf { value } => return Ok(*value),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features.get(*feature).copied().ok_or(
                        ModelError::DimensionMismatch {
                            expected: feature + 1,
                            actual: features.len(),
                        },
                    )?;
                    node = if value <= *threshold { left } else { right };
                }
            }
        }
    }

    fn is_fitted(&self) -> bool {
        self.root.is_some()
    }
}
