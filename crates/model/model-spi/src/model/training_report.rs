//! Outcome of a training run.

use serde::{Deserialize, Serialize};

use crate::model::{Candidate, ModelMetrics};

/// What was trained, how well it scored, and what it beat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// The winning candidate.
    pub candidate: Candidate,
    /// Hold-out metrics of the winner.
    pub metrics: ModelMetrics,
    /// RMSE of every candidate that trained successfully.
    pub all_scores: Vec<(Candidate, f64)>,
    /// Rows used for fitting.
    pub train_rows: usize,
    /// Rows used for evaluation.
    pub test_rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let report = TrainingReport {
            candidate: Candidate::Ridge { alpha: 1.0 },
            metrics: ModelMetrics {
                rmse: 10.0,
                mae: 7.5,
                r2: 0.9,
            },
            all_scores: vec![
                (Candidate::Ridge { alpha: 1.0 }, 10.0),
                (Candidate::Knn { k: 5 }, 14.2),
            ],
            train_rows: 160,
            test_rows: 40,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: TrainingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.candidate, report.candidate);
        assert_eq!(back.all_scores.len(), 2);
        assert_eq!(back.train_rows, 160);
    }
}
