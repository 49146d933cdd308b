pub mod forecast_point;
pub mod severity;

pub use forecast_point::ForecastPoint;
pub use severity::Severity;
