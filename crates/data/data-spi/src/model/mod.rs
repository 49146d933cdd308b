//! Data models for hourly environmental series.

mod hourly_series;
mod request;

pub use hourly_series::{HourlyRecord, HourlySeries};
pub use request::{HourlyRange, HourlyRequest, Location};
