//! Iterative multi-step forecasting
//!
//! Projects AQI forward one hour at a time, feeding each prediction
//! back as the next step's lag feature. Non-time-dependent features
//! (pollutants, weather) are held fixed at the base row's values for
//! the whole horizon, since no future observations exist for them.

use chrono::{DateTime, Duration, Utc};
use forecast_api::{ForecastConfig, LagFeedback};
use forecast_spi::{ForecastError, ForecastPoint, Result};
use model_spi::Regressor;
use pipeline_spi::FeatureRow;
use tracing::debug;

/// One-step autoregressive forecaster.
#[derive(Debug, Clone)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self {
            config: ForecastConfig::default(),
        }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Predict the next `horizon` hours from the most recent known row.
    ///
    /// The first point lands at `now + 1h` and each subsequent point one
    /// hour later. Each step's `aqi_lag1` is the previous step's output
    /// (per the configured [`LagFeedback`] policy) and its change rate
    /// is forced to zero, since the true rate of an unobserved step is
    /// unknowable. Deterministic given a deterministic regressor. Any
    /// regressor failure fails the whole forecast.
    pub fn forecast(
        &self,
        regressor: &dyn Regressor,
        base_row: &FeatureRow,
        now: DateTime<Utc>,
    ) -> Result<Vec<ForecastPoint>> {
        if self.config.horizon == 0 {
            return Err(ForecastError::InvalidHorizon { horizon: 0 });
        }

        let mut last_aqi = base_row.aqi;
        let mut points = Vec::with_capacity(self.config.horizon);

        for step in 1..=self.config.horizon {
            let t = now + Duration::hours(step as i64);

            let mut row = base_row.clone();
            row.timestamp = t;
            row.apply_calendar(t);
            row.aqi_lag1 = last_aqi;
            row.aqi_change_rate = 0.0;

            let prediction = regressor
                .predict(&row.feature_vector())
                .map_err(|source| ForecastError::Regressor { step, source })?;
            let rounded = prediction.round();

            last_aqi = match self.config.lag_feedback {
                LagFeedback::Unrounded => prediction,
                LagFeedback::Rounded => rounded,
            };

            points.push(ForecastPoint {
                timestamp: t,
                aqi: rounded as i64,
            });
        }

        debug!(
            horizon = self.config.horizon,
            first_aqi = points[0].aqi,
            "forecast complete"
        );
        Ok(points)
    }
}
