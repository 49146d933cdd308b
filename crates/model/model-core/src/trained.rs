//! Serialisable wrapper over the fitted model families.

use model_spi::{Regressor, Result};
use serde::{Deserialize, Serialize};

use crate::{GradientBoosting, KnnRegressor, RidgeRegression};

/// A fitted model of any family, ready for persistence or prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TrainedRegressor {
    Ridge(RidgeRegression),
    GradientBoosting(GradientBoosting),
    Knn(KnnRegressor),
}

impl Regressor for TrainedRegressor {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        match self {
            TrainedRegressor::Ridge(model) => model.fit(x, y),
            TrainedRegressor::GradientBoosting(model) => model.fit(x, y),
            TrainedRegressor::Knn(model) => model.fit(x, y),
        }
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        match self {
            TrainedRegressor::Ridge(model) => model.predict(features),
            TrainedRegressor::GradientBoosting(model) => model.predict(features),
            TrainedRegressor::Knn(model) => model.predict(features),
        }
    }

    fn is_fitted(&self) -> bool {
        match self {
            TrainedRegressor::Ridge(model) => model.is_fitted(),
            TrainedRegressor::GradientBoosting(model) => model.is_fitted(),
            TrainedRegressor::Knn(model) => model.is_fitted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegates_to_inner_model() {
        let mut model = TrainedRegressor::Ridge(RidgeRegression::new(0.0).unwrap());
        assert!(!model.is_fitted());

        let x: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = (0..10).map(|i| 2.0 * i as f64).collect();
        model.fit(&x, &y).unwrap();

        assert!(model.is_fitted());
        assert!((model.predict(&[5.0]).unwrap() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_serde_roundtrip_across_families() {
        let x: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = (0..10).map(|i| i as f64 + 1.0).collect();

        let mut knn = KnnRegressor::new(3).unwrap();
        knn.fit(&x, &y).unwrap();
        let model = TrainedRegressor::Knn(knn);

        let json = serde_json::to_string(&model).unwrap();
        let restored: TrainedRegressor = serde_json::from_str(&json).unwrap();
        assert!(matches!(restored, TrainedRegressor::Knn(_)));
        assert!(
            (restored.predict(&[4.0]).unwrap() - model.predict(&[4.0]).unwrap()).abs() < 1e-12
        );
    }
}
