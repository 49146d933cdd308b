//! Forecast core implementations
//!
//! - [`Forecaster`]: the iterative multi-step autoregressive loop
//! - [`TtlCache`]: time-window memoization with an injected clock
//! - [`SystemClock`]: the wall-clock [`Clock`] implementation

pub mod cache;
pub mod clock;
pub mod forecaster;

pub use cache::TtlCache;
pub use clock::SystemClock;
pub use forecaster::Forecaster;

pub use forecast_spi::Clock;
