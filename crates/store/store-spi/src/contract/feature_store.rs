//! Feature store contract.

use pipeline_spi::FeatureRow;

use crate::Result;

/// Persistence for engineered feature rows.
///
/// Rows are keyed by `(city, timestamp_unix)`; writing a key twice
/// replaces the earlier row, so inserts are idempotent.
pub trait FeatureStore: Send + Sync {
    /// Upsert a batch of rows. Returns the number of rows written.
    fn insert(&self, rows: &[FeatureRow]) -> Result<usize>;

    /// All rows for a city in ascending timestamp order.
    ///
    /// An unknown city yields an empty vector, not an error.
    fn read_all(&self, city: &str) -> Result<Vec<FeatureRow>>;

    /// The most recent row for a city, or [`StoreError::NoData`]
    /// when none exist.
    ///
    /// [`StoreError::NoData`]: crate::StoreError::NoData
    fn read_latest(&self, city: &str) -> Result<FeatureRow>;
}
