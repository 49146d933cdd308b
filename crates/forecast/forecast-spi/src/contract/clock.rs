//! Injectable time source.

use chrono::{DateTime, Utc};

/// The current instant, abstracted so caches and forecasts can be
/// driven by a fake clock in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
