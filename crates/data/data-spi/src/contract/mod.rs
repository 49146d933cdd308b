//! Contracts for hourly data sources.

mod hourly_source;

pub use hourly_source::HourlySource;
