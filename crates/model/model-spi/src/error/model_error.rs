//! Model error types.

use thiserror::Error;

/// Errors that can occur while training or applying regression models.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Insufficient rows for the operation.
    #[error("Insufficient data: need at least {required} rows, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Feature vector length does not match the trained model.
    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Prediction requested before the model was fitted.
    #[error("Model has not been fitted")]
    NotFitted,

    /// Numerical computation error.
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Every candidate model failed to train.
    #[error("No models could be fitted to the data: {0}")]
    NoValidModels(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_error() {
        let error = ModelError::InsufficientData {
            required: 20,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 20 rows, got 3"
        );
    }

    #[test]
    fn test_invalid_parameter_error() {
        let error = ModelError::InvalidParameter {
            name: "k".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid parameter 'k': must be at least 1");
    }

    #[test]
    fn test_dimension_mismatch_error() {
        let error = ModelError::DimensionMismatch {
            expected: 16,
            actual: 4,
        };
        assert_eq!(
            error.to_string(),
            "Dimension mismatch: expected 16 features, got 4"
        );
    }

    #[test]
    fn test_not_fitted_error() {
        assert_eq!(ModelError::NotFitted.to_string(), "Model has not been fitted");
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_std_error<E: std::error::Error>() {}
        assert_std_error::<ModelError>();
    }
}
