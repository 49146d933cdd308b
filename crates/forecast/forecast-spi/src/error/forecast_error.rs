//! Forecast error types.

use model_spi::ModelError;
use thiserror::Error;

/// Errors that can occur while producing a forecast.
///
/// A regressor failure at any step fails the whole forecast; there are
/// no partial results.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The regressor failed at some step of the horizon.
    #[error("Regressor failed at step {step}: {source}")]
    Regressor {
        step: usize,
        #[source]
        source: ModelError,
    },

    /// The requested horizon is not usable.
    #[error("Invalid horizon {horizon}: must be at least 1")]
    InvalidHorizon { horizon: usize },
}
