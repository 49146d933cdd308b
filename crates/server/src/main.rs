//! # aqicast-server
//!
//! REST API for the AQI forecasting pipeline. Serves the latest stored
//! observation and the 72-hour forecast, both behind time-window caches.

use axum::{routing::get, Json, Router};
use chrono::Duration;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forecast_facade::prelude::*;
use model_facade::prelude::*;
use store_facade::prelude::*;

mod routes;

use routes::{CurrentResponse, ForecastResponse};

/// Application state shared across handlers.
///
/// Holds the process-lifetime handles: the store, the loaded regressor,
/// the forecaster and the two response caches. Nothing here is
/// reinitialised implicitly; the state is built once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub city: String,
    pub store: Arc<dyn FeatureStore>,
    pub model: Arc<TrainedRegressor>,
    pub forecaster: Arc<Forecaster>,
    pub clock: Arc<dyn Clock>,
    /// Latest-observation cache, 5 minutes.
    pub current_cache: Arc<TtlCache<String, CurrentResponse>>,
    /// Forecast cache, 1 hour.
    pub forecast_cache: Arc<TtlCache<String, ForecastResponse>>,
}

impl AppState {
    pub fn new(
        city: String,
        store: Arc<dyn FeatureStore>,
        model: TrainedRegressor,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            city,
            store,
            model: Arc::new(model),
            forecaster: Arc::new(Forecaster::with_defaults()),
            current_cache: Arc::new(TtlCache::new(Duration::minutes(5), clock.clone())),
            forecast_cache: Arc::new(TtlCache::new(Duration::hours(1), clock.clone())),
            clock,
        }
    }
}

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - do we have data to serve?
async fn readiness(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let store_ready = match state.store.read_latest(&state.city) {
        Ok(_) => "ready",
        Err(StoreError::NoData) => "empty",
        Err(_) => "unavailable",
    };
    Json(serde_json::json!({
        "status": store_ready,
        "city": state.city,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn load_model(config: &StoreConfig, name: &str) -> std::result::Result<TrainedRegressor, String> {
    let registry = LocalModelRegistry::new(config);
    let version = registry
        .latest_version(name)
        .map_err(|e| format!("no trained model '{name}': {e}"))?;
    let stored = registry
        .get(name, version)
        .map_err(|e| format!("loading model '{name}' v{version}: {e}"))?;
    let model: TrainedRegressor = serde_json::from_value(stored.artifact)
        .map_err(|e| format!("deserializing model '{name}' v{version}: {e}"))?;
    tracing::info!(name, version, candidate = %stored.report.candidate, "model loaded");
    Ok(model)
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aqicast_server=info,tower_http=info".into()),
        )
        .init();

    let city = env::var("CITY").unwrap_or_else(|_| "Karachi".to_string());
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let model_name = env::var("MODEL_NAME").unwrap_or_else(|_| "aqi_forecaster".to_string());

    let store_config = StoreConfig::new(&data_dir);
    let model = match load_model(&store_config, &model_name) {
        Ok(model) => model,
        Err(message) => {
            tracing::error!(%message, "cannot start without a model; run `aqicast train` first");
            std::process::exit(1);
        }
    };

    let state = AppState::new(
        city,
        Arc::new(LocalFeatureStore::new(&store_config)),
        model,
        Arc::new(SystemClock),
    );

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with middleware
    let app = Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        // API endpoints
        .route("/api/v1/current", get(routes::current))
        .route("/api/v1/forecast", get(routes::forecast))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "aqicast-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
