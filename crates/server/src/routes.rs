//! API route handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use forecast_facade::prelude::{Clock, ForecastError, Severity};
use pipeline_spi::FeatureRow;
use store_facade::prelude::{FeatureStore, StoreError};

use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct SeverityBody {
    pub index: usize,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<Severity> for SeverityBody {
    fn from(severity: Severity) -> Self {
        Self {
            index: severity.index(),
            label: severity.label(),
            color: severity.color(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentResponse {
    pub city: String,
    pub timestamp: DateTime<Utc>,
    pub aqi: i64,
    pub severity: SeverityBody,
}

impl CurrentResponse {
    fn from_row(row: &FeatureRow) -> Self {
        let aqi = row.aqi.round() as i64;
        Self {
            city: row.city.clone(),
            timestamp: row.timestamp,
            aqi,
            severity: Severity::from_aqi(aqi).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastPointBody {
    pub timestamp: DateTime<Utc>,
    pub aqi: i64,
    pub severity: SeverityBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub city: String,
    pub generated_at: DateTime<Utc>,
    pub points: Vec<ForecastPointBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures surfaced by the API, mapped to distinct status codes:
/// empty store is 404, unreachable store is 503, a regressor failure
/// is 502.
#[derive(Debug)]
pub enum ApiError {
    Store(StoreError),
    Forecast(ForecastError),
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        ApiError::Store(error)
    }
}

impl From<ForecastError> for ApiError {
    fn from(error: ForecastError) -> Self {
        ApiError::Forecast(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Store(StoreError::NoData) => {
                (StatusCode::NOT_FOUND, "no data available yet".to_string())
            }
            ApiError::Store(error) => (StatusCode::SERVICE_UNAVAILABLE, error.to_string()),
            ApiError::Forecast(_) => (StatusCode::BAD_GATEWAY, "forecast unavailable".to_string()),
        };
        tracing::warn!(status = %status, %message, "request failed");
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Latest stored observation, cached for five minutes.
pub async fn current(
    State(state): State<AppState>,
) -> Result<Json<CurrentResponse>, ApiError> {
    let response = state
        .current_cache
        .get_or_try_insert_with(state.city.clone(), || {
            let row = state.store.read_latest(&state.city)?;
            Ok::<_, ApiError>(CurrentResponse::from_row(&row))
        })?;
    Ok(Json(response))
}

/// 72-hour forecast from the latest observation, cached for an hour.
pub async fn forecast(
    State(state): State<AppState>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let response = state
        .forecast_cache
        .get_or_try_insert_with(state.city.clone(), || {
            let row = state.store.read_latest(&state.city)?;
            let now = state.clock.now();
            let points = state.forecaster.forecast(state.model.as_ref(), &row, now)?;

            Ok::<_, ApiError>(ForecastResponse {
                city: state.city.clone(),
                generated_at: now,
                points: points
                    .into_iter()
                    .map(|point| ForecastPointBody {
                        timestamp: point.timestamp,
                        aqi: point.aqi,
                        severity: Severity::from_aqi(point.aqi).into(),
                    })
                    .collect(),
            })
        })?;
    Ok(Json(response))
}
