//! Candidate training and selection
//!
//! Fits every configured candidate on a seeded train split, scores it
//! on the hold-out rows, and keeps the model with the strictly lowest
//! RMSE. Ties keep the earlier candidate. Candidates that fail to train
//! are logged and skipped rather than failing the run.

use model_api::TrainConfig;
use model_spi::{Candidate, ModelError, ModelMetrics, Regressor, Result, TrainingReport};
use tracing::{info, warn};

use crate::metrics::{mae, r2_score, rmse};
use crate::split::train_test_split;
use crate::trained::TrainedRegressor;
use crate::{GradientBoosting, KnnRegressor, RidgeRegression};

/// Minimum rows before a training run is attempted.
pub const MIN_TRAINING_ROWS: usize = 20;

/// Index of the lowest score. An exact tie keeps the earliest entry.
fn best_index(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if best.map_or(true, |(_, current)| score < current) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

/// A trained model together with its report.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub model: TrainedRegressor,
    pub report: TrainingReport,
}

/// Trains the candidate set and selects the best model.
#[derive(Debug, Clone)]
pub struct ModelTrainer {
    config: TrainConfig,
}

impl ModelTrainer {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self {
            config: TrainConfig::default(),
        }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    fn instantiate(candidate: &Candidate) -> Result<TrainedRegressor> {
        match candidate {
            Candidate::Ridge { alpha } => {
                Ok(TrainedRegressor::Ridge(RidgeRegression::new(*alpha)?))
            }
            Candidate::GradientBoosting {
                n_estimators,
                learning_rate,
                max_depth,
            } => Ok(TrainedRegressor::GradientBoosting(GradientBoosting::new(
                *n_estimators,
                *learning_rate,
                *max_depth,
            )?)),
            Candidate::Knn { k } => Ok(TrainedRegressor::Knn(KnnRegressor::new(*k)?)),
        }
    }

    fn evaluate(
        candidate: &Candidate,
        train_x: &[Vec<f64>],
        train_y: &[f64],
        test_x: &[Vec<f64>],
        test_y: &[f64],
    ) -> Option<(TrainedRegressor, f64)> {
        let mut model = match Self::instantiate(candidate) {
            Ok(model) => model,
            Err(error) => {
                warn!(%candidate, %error, "skipping candidate: construction failed");
                return None;
            }
        };

        if let Err(error) = model.fit(train_x, train_y) {
            warn!(%candidate, %error, "skipping candidate: fit failed");
            return None;
        }

        let mut predicted = Vec::with_capacity(test_x.len());
        for row in test_x {
            match model.predict(row) {
                Ok(value) => predicted.push(value),
                Err(error) => {
                    warn!(%candidate, %error, "skipping candidate: prediction failed");
                    return None;
                }
            }
        }

        let score = rmse(test_y, &predicted);
        if !score.is_finite() {
            warn!(%candidate, score, "skipping candidate: non-finite RMSE");
            return None;
        }
        Some((model, score))
    }

    /// Train every candidate and return the best model with its report.
    pub fn train(&self, x: &[Vec<f64>], y: &[f64]) -> Result<TrainingOutcome> {
        if x.len() != y.len() || x.len() < MIN_TRAINING_ROWS {
            return Err(ModelError::InsufficientData {
                required: MIN_TRAINING_ROWS,
                actual: x.len().min(y.len()),
            });
        }

        let (train_x, train_y, test_x, test_y) =
            train_test_split(x, y, self.config.test_ratio, self.config.seed);

        let mut evaluated: Vec<(Candidate, TrainedRegressor, f64)> = Vec::new();

        for candidate in &self.config.candidates {
            let Some((model, score)) =
                Self::evaluate(candidate, &train_x, &train_y, &test_x, &test_y)
            else {
                continue;
            };

            info!(%candidate, rmse = score, "candidate evaluated");
            evaluated.push((candidate.clone(), model, score));
        }

        let all_scores: Vec<(Candidate, f64)> = evaluated
            .iter()
            .map(|(candidate, _, score)| (candidate.clone(), *score))
            .collect();
        let scores: Vec<f64> = evaluated.iter().map(|(_, _, score)| *score).collect();
        let winner = best_index(&scores).ok_or_else(|| {
            ModelError::NoValidModels("all candidates failed to train".to_string())
        })?;
        let (candidate, model, score) = evaluated.remove(winner);

        let predicted: Vec<f64> = test_x
            .iter()
            .map(|row| model.predict(row))
            .collect::<Result<_>>()?;
        let metrics = ModelMetrics {
            rmse: score,
            mae: mae(&test_y, &predicted),
            r2: r2_score(&test_y, &predicted),
        };

        info!(%candidate, rmse = metrics.rmse, "selected best model");

        Ok(TrainingOutcome {
            model,
            report: TrainingReport {
                candidate,
                metrics,
                all_scores,
                train_rows: train_x.len(),
                test_rows: test_x.len(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linear data with two features, enough rows for a split.
    fn linear_data(n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
        let x: Vec<Vec<f64>> = (0..n)
            .map(|i| vec![i as f64, (i % 7) as f64])
            .collect();
        let y: Vec<f64> = x.iter().map(|row| 2.0 + 3.0 * row[0] + row[1]).collect();
        (x, y)
    }

    #[test]
    fn test_exact_tie_keeps_first_entry() {
        assert_eq!(best_index(&[2.0, 2.0]), Some(0));
        assert_eq!(best_index(&[1.0, 0.5, 0.5, 0.5]), Some(1));
    }

    #[test]
    fn test_strictly_lower_score_replaces_earlier_entry() {
        assert_eq!(best_index(&[2.0, 1.0, 1.5]), Some(1));
        assert_eq!(best_index(&[3.0]), Some(0));
        assert_eq!(best_index(&[]), None);
    }

    #[test]
    fn test_too_few_rows() {
        let (x, y) = linear_data(MIN_TRAINING_ROWS - 1);
        let trainer = ModelTrainer::with_defaults();
        assert!(matches!(
            trainer.train(&x, &y),
            Err(ModelError::InsufficientData {
                required: MIN_TRAINING_ROWS,
                ..
            })
        ));
    }

    #[test]
    fn test_trains_and_selects_a_model() {
        let (x, y) = linear_data(60);
        let trainer = ModelTrainer::with_defaults();
        let outcome = trainer.train(&x, &y).unwrap();

        assert!(outcome.model.is_fitted());
        assert!(outcome.report.metrics.rmse.is_finite());
        assert!(!outcome.report.all_scores.is_empty());
        assert_eq!(
            outcome.report.train_rows + outcome.report.test_rows,
            60
        );
    }

    #[test]
    fn test_ridge_wins_on_linear_data() {
        let (x, y) = linear_data(100);
        let trainer = ModelTrainer::with_defaults();
        let outcome = trainer.train(&x, &y).unwrap();

        // Ridge fits a linear target exactly up to the penalty.
        assert!(matches!(
            outcome.report.candidate,
            Candidate::Ridge { .. }
        ));
        assert!(outcome.report.metrics.r2 > 0.99);
    }

    #[test]
    fn test_best_score_is_minimum_of_all_scores() {
        let (x, y) = linear_data(80);
        let trainer = ModelTrainer::with_defaults();
        let outcome = trainer.train(&x, &y).unwrap();

        let minimum = outcome
            .report
            .all_scores
            .iter()
            .map(|(_, s)| *s)
            .fold(f64::INFINITY, f64::min);
        assert!((outcome.report.metrics.rmse - minimum).abs() < 1e-12);
    }

    #[test]
    fn test_failing_candidates_are_skipped() {
        let (x, y) = linear_data(40);
        let config = TrainConfig::default().candidates(vec![
            // Invalid construction, should be skipped with a warning.
            Candidate::Knn { k: 0 },
            Candidate::Ridge { alpha: 1.0 },
        ]);
        let outcome = ModelTrainer::new(config).train(&x, &y).unwrap();
        assert!(matches!(
            outcome.report.candidate,
            Candidate::Ridge { .. }
        ));
        assert_eq!(outcome.report.all_scores.len(), 1);
    }

    #[test]
    fn test_all_candidates_failing_is_no_valid_models() {
        let (x, y) = linear_data(40);
        let config = TrainConfig::default().candidates(vec![Candidate::Knn { k: 0 }]);
        assert!(matches!(
            ModelTrainer::new(config).train(&x, &y),
            Err(ModelError::NoValidModels(_))
        ));
    }

    #[test]
    fn test_same_seed_reproduces_selection() {
        let (x, y) = linear_data(60);
        let trainer = ModelTrainer::with_defaults();
        let first = trainer.train(&x, &y).unwrap();
        let second = trainer.train(&x, &y).unwrap();
        assert_eq!(first.report.candidate, second.report.candidate);
        assert!((first.report.metrics.rmse - second.report.metrics.rmse).abs() < 1e-12);
    }
}
