//! Data Core
//!
//! Open-Meteo client implementation and the historical backfill loop.

mod backfill;
mod openmeteo;

pub use backfill::backfill_history;
pub use openmeteo::OpenMeteoClient;

// Re-export API and SPI for downstream convenience
pub use data_api::*;
