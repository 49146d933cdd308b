//! A stored model version.

use model_spi::TrainingReport;
use serde::{Deserialize, Serialize};

/// One version of a named model, as held by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredModel {
    pub name: String,
    pub version: u32,
    /// The serialized model, opaque to the registry.
    pub artifact: serde_json::Value,
    /// Training report recorded alongside the artifact.
    pub report: TrainingReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_spi::{Candidate, ModelMetrics};

    #[test]
    fn test_serde_roundtrip() {
        let model = RegisteredModel {
            name: "aqi_forecaster".to_string(),
            version: 2,
            artifact: serde_json::json!({"Ridge": {"alpha": 1.0, "weights": [1.0, 2.0]}}),
            report: TrainingReport {
                candidate: Candidate::Ridge { alpha: 1.0 },
                metrics: ModelMetrics {
                    rmse: 9.0,
                    mae: 7.0,
                    r2: 0.91,
                },
                all_scores: vec![],
                train_rows: 100,
                test_rows: 25,
            },
        };

        let json = serde_json::to_string(&model).unwrap();
        let back: RegisteredModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "aqi_forecaster");
        assert_eq!(back.version, 2);
        assert_eq!(back.artifact, model.artifact);
    }
}
