//! # aqicast-cli
//!
//! Command-line interface for the AQI forecasting pipeline: ingest and
//! backfill hourly data, train the regressor, and print forecasts.

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;

use data_facade::prelude::{
    air_quality_request, backfill_history, weather_request, BackfillConfig, HourlyRange,
    HourlySeries, HourlySource, Location, OpenMeteoClient,
};
use forecast_facade::prelude::{
    Clock, ForecastConfig, Forecaster, LagFeedback, Severity, SystemClock,
};
use model_facade::prelude::{ModelTrainer, TrainedRegressor};
use pipeline_facade::prelude::{FeatureBuilder, FeatureConfig, FeatureRow};
use store_facade::prelude::{
    FeatureStore, LocalFeatureStore, LocalModelRegistry, ModelRegistry, StoreConfig,
};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "aqicast")]
#[command(about = "72-hour AQI forecasting pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch recent hourly data and store engineered feature rows
    Ingest {
        /// Latitude of the monitored location
        #[arg(long, default_value = "24.8607")]
        latitude: f64,

        /// Longitude of the monitored location
        #[arg(long, default_value = "67.0011")]
        longitude: f64,

        /// IANA timezone for the hourly axis
        #[arg(long, default_value = "Asia/Karachi")]
        timezone: String,

        /// City label attached to stored rows
        #[arg(short, long, default_value = "Karachi")]
        city: String,

        /// Days of recent data to fetch
        #[arg(short, long, default_value = "3")]
        days: u8,

        /// Store root directory
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Fetch up to a year of history in throttled batches
    Backfill {
        /// Latitude of the monitored location
        #[arg(long, default_value = "24.8607")]
        latitude: f64,

        /// Longitude of the monitored location
        #[arg(long, default_value = "67.0011")]
        longitude: f64,

        /// IANA timezone for the hourly axis
        #[arg(long, default_value = "Asia/Karachi")]
        timezone: String,

        /// City label attached to stored rows
        #[arg(short, long, default_value = "Karachi")]
        city: String,

        /// Total days of history to cover
        #[arg(short, long, default_value = "365")]
        days: i64,

        /// Days per air-quality batch
        #[arg(long, default_value = "90")]
        batch_days: i64,

        /// Store root directory
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Train candidate regressors on stored rows and register the best
    Train {
        /// City whose rows are used for training
        #[arg(short, long, default_value = "Karachi")]
        city: String,

        /// Store root directory
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Registry name for the trained model
        #[arg(long, default_value = "aqi_forecaster")]
        model_name: String,

        /// Write the training report as JSON (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the forecast from the latest stored row
    Forecast {
        /// City to forecast for
        #[arg(short, long, default_value = "Karachi")]
        city: String,

        /// Number of future hourly steps
        #[arg(long, default_value = "72")]
        horizon: usize,

        /// Feed the rounded prediction back instead of the raw one
        #[arg(long)]
        rounded_feedback: bool,

        /// Store root directory
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Registry name of the trained model
        #[arg(long, default_value = "aqi_forecaster")]
        model_name: String,

        /// Write the forecast as JSON (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Build feature rows from the two series and upsert them into the store.
fn build_and_store(
    city: &str,
    data_dir: &PathBuf,
    air_quality: &HourlySeries,
    weather: &HourlySeries,
) -> CliResult<usize> {
    let builder = FeatureBuilder::new(FeatureConfig::new(city));
    let rows = builder
        .build(air_quality, weather)
        .map_err(|e| e.to_string())?;

    if rows.is_empty() {
        println!("No overlapping hourly data; nothing stored");
        return Ok(0);
    }

    let store = LocalFeatureStore::new(&StoreConfig::new(data_dir));
    let written = store.insert(&rows).map_err(|e| e.to_string())?;
    println!("Stored {} feature rows for {}", written, city);
    Ok(written)
}

fn run_ingest(
    latitude: f64,
    longitude: f64,
    timezone: String,
    city: String,
    days: u8,
    data_dir: PathBuf,
) -> CliResult<()> {
    let client = OpenMeteoClient::new();
    let location = Location::new(latitude, longitude);

    let air_quality = client
        .fetch_air_quality(&air_quality_request(
            location,
            HourlyRange::ForecastDays(days),
            &timezone,
        ))
        .map_err(|e| e.to_string())?;
    let weather = client
        .fetch_weather(&weather_request(
            location,
            HourlyRange::ForecastDays(days),
            &timezone,
        ))
        .map_err(|e| e.to_string())?;

    println!(
        "Fetched {} air-quality hours and {} weather hours",
        air_quality.len(),
        weather.len()
    );
    build_and_store(&city, &data_dir, &air_quality, &weather)?;
    Ok(())
}

fn run_backfill(
    latitude: f64,
    longitude: f64,
    timezone: String,
    city: String,
    days: i64,
    batch_days: i64,
    data_dir: PathBuf,
) -> CliResult<()> {
    let client = OpenMeteoClient::new();
    let config = BackfillConfig::default().days(days).batch_days(batch_days);

    let (air_quality, weather) = backfill_history(
        &client,
        Location::new(latitude, longitude),
        &timezone,
        &config,
        Utc::now().date_naive(),
    )
    .map_err(|e| e.to_string())?;

    println!(
        "Backfilled {} air-quality hours and {} weather hours",
        air_quality.len(),
        weather.len()
    );
    build_and_store(&city, &data_dir, &air_quality, &weather)?;
    Ok(())
}

fn run_train(
    city: String,
    data_dir: PathBuf,
    model_name: String,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let store_config = StoreConfig::new(&data_dir);
    let store = LocalFeatureStore::new(&store_config);

    let rows = store.read_all(&city).map_err(|e| e.to_string())?;
    println!("Loaded {} stored rows for {}", rows.len(), city);

    let x: Vec<Vec<f64>> = rows.iter().map(FeatureRow::feature_vector).collect();
    let y: Vec<f64> = rows.iter().map(|row| row.aqi).collect();

    let outcome = ModelTrainer::with_defaults()
        .train(&x, &y)
        .map_err(|e| e.to_string())?;

    println!("Best model: {}", outcome.report.candidate);
    println!(
        "  RMSE {:.3}  MAE {:.3}  R2 {:.3}  (train {} / test {})",
        outcome.report.metrics.rmse,
        outcome.report.metrics.mae,
        outcome.report.metrics.r2,
        outcome.report.train_rows,
        outcome.report.test_rows,
    );
    for (candidate, score) in &outcome.report.all_scores {
        println!("  candidate {candidate}: RMSE {score:.3}");
    }

    let artifact = serde_json::to_value(&outcome.model)
        .map_err(|e| format!("Failed to serialize model: {}", e))?;
    let registry = LocalModelRegistry::new(&store_config);
    let version = registry
        .create(&model_name, artifact, &outcome.report)
        .map_err(|e| e.to_string())?;
    println!("Registered {} v{}", model_name, version);

    if let Some(path) = output {
        let mut file =
            File::create(&path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &outcome.report)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Training report written to {:?}", path);
    }

    Ok(())
}

fn run_forecast(
    city: String,
    horizon: usize,
    rounded_feedback: bool,
    data_dir: PathBuf,
    model_name: String,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let store_config = StoreConfig::new(&data_dir);
    let registry = LocalModelRegistry::new(&store_config);

    let version = registry.latest_version(&model_name).map_err(|e| e.to_string())?;
    let stored = registry.get(&model_name, version).map_err(|e| e.to_string())?;
    let model: TrainedRegressor = serde_json::from_value(stored.artifact)
        .map_err(|e| format!("Failed to deserialize model: {}", e))?;
    println!(
        "Loaded {} v{} ({})",
        model_name, version, stored.report.candidate
    );

    let store = LocalFeatureStore::new(&store_config);
    let base_row = store.read_latest(&city).map_err(|e| e.to_string())?;
    println!(
        "Forecasting from {} (AQI {})",
        base_row.timestamp,
        base_row.aqi.round()
    );

    let lag_feedback = if rounded_feedback {
        LagFeedback::Rounded
    } else {
        LagFeedback::Unrounded
    };
    let forecaster = Forecaster::new(
        ForecastConfig::default()
            .horizon(horizon)
            .lag_feedback(lag_feedback),
    );

    let points = forecaster
        .forecast(&model, &base_row, SystemClock.now())
        .map_err(|e| e.to_string())?;

    for point in &points {
        let severity = Severity::from_aqi(point.aqi);
        println!("  {}  AQI {:>3}  {}", point.timestamp, point.aqi, severity);
    }

    if let Some(path) = output {
        let json = serde_json::json!({
            "city": city,
            "model": format!("{} v{}", model_name, version),
            "points": points,
        });
        let mut file =
            File::create(&path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Forecast written to {:?}", path);
    }

    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ingest {
            latitude,
            longitude,
            timezone,
            city,
            days,
            data_dir,
        } => run_ingest(latitude, longitude, timezone, city, days, data_dir),

        Commands::Backfill {
            latitude,
            longitude,
            timezone,
            city,
            days,
            batch_days,
            data_dir,
        } => run_backfill(latitude, longitude, timezone, city, days, batch_days, data_dir),

        Commands::Train {
            city,
            data_dir,
            model_name,
            output,
        } => run_train(city, data_dir, model_name, output),

        Commands::Forecast {
            city,
            horizon,
            rounded_feedback,
            data_dir,
            model_name,
            output,
        } => run_forecast(city, horizon, rounded_feedback, data_dir, model_name, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
