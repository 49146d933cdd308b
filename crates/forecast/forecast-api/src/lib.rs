//! Forecast Consumer API
//!
//! Configuration types for forecast consumers.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use forecast_spi::{Clock, ForecastError, ForecastPoint, Result, Severity};

/// Which value feeds the next step's lag feature.
///
/// Propagating the unrounded prediction avoids compounding quantisation
/// error across a long horizon; rounded propagation reproduces displays
/// that round before reassigning. Unrounded is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LagFeedback {
    /// Feed back the raw regressor output.
    #[default]
    Unrounded,
    /// Feed back the integer shown to the user.
    Rounded,
}

/// Configuration for the iterative forecaster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of future hourly steps to predict.
    pub horizon: usize,
    /// Lag feedback policy between steps.
    pub lag_feedback: LagFeedback,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: 72,
            lag_feedback: LagFeedback::Unrounded,
        }
    }
}

impl ForecastConfig {
    /// Set the forecast horizon.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the lag feedback policy.
    pub fn lag_feedback(mut self, policy: LagFeedback) -> Self {
        self.lag_feedback = policy;
        self
    }
}
