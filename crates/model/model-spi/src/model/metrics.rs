//! Hold-out evaluation metrics.

use serde::{Deserialize, Serialize};

/// Accuracy of a trained model on the hold-out split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Root mean squared error. Lower is better; the selection criterion.
    pub rmse: f64,
    /// Mean absolute error.
    pub mae: f64,
    /// Coefficient of determination.
    pub r2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let metrics = ModelMetrics {
            rmse: 11.5,
            mae: 8.2,
            r2: 0.87,
        };
        let json = serde_json::to_string(&metrics).unwrap();
        let back: ModelMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
    }
}
