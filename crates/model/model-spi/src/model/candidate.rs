//! Candidate model descriptions.

use serde::{Deserialize, Serialize};

/// A model family with its hyperparameters, as entered into training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Candidate {
    /// L2-regularised linear regression solved by normal equations.
    Ridge { alpha: f64 },
    /// Gradient-boosted regression trees on squared-error residuals.
    GradientBoosting {
        n_estimators: usize,
        learning_rate: f64,
        max_depth: usize,
    },
    /// K-nearest-neighbours with inverse-distance weighting.
    Knn { k: usize },
}

impl Candidate {
    /// The default candidate set tried during training.
    pub fn default_set() -> Vec<Candidate> {
        vec![
            Candidate::Ridge { alpha: 1.0 },
            Candidate::GradientBoosting {
                n_estimators: 300,
                learning_rate: 0.05,
                max_depth: 5,
            },
            Candidate::Knn { k: 5 },
        ]
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Candidate::Ridge { alpha } => write!(f, "Ridge(alpha={:.2})", alpha),
            Candidate::GradientBoosting {
                n_estimators,
                learning_rate,
                max_depth,
            } => write!(
                f,
                "GradientBoosting(n_estimators={}, learning_rate={:.2}, max_depth={})",
                n_estimators, learning_rate, max_depth
            ),
            Candidate::Knn { k } => write!(f, "KNN(k={})", k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_has_three_families() {
        let set = Candidate::default_set();
        assert_eq!(set.len(), 3);
        assert!(matches!(set[0], Candidate::Ridge { .. }));
        assert!(matches!(set[1], Candidate::GradientBoosting { .. }));
        assert!(matches!(set[2], Candidate::Knn { .. }));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Candidate::Ridge { alpha: 1.0 }.to_string(),
            "Ridge(alpha=1.00)"
        );
        assert_eq!(Candidate::Knn { k: 5 }.to_string(), "KNN(k=5)");
        assert_eq!(
            Candidate::GradientBoosting {
                n_estimators: 300,
                learning_rate: 0.05,
                max_depth: 5,
            }
            .to_string(),
            "GradientBoosting(n_estimators=300, learning_rate=0.05, max_depth=5)"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let candidate = Candidate::GradientBoosting {
            n_estimators: 300,
            learning_rate: 0.05,
            max_depth: 5,
        };
        let json = serde_json::to_string(&candidate).unwrap();
        let back: Candidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, candidate);
    }
}
