//! Store error types.

use thiserror::Error;

/// Errors from the feature store and model registry.
///
/// "No data yet" and "store unreachable" are distinct conditions and
/// must stay distinguishable for callers; the serving layer maps them
/// to different responses.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store is reachable but holds no rows for the query.
    #[error("No data available")]
    NoData,

    /// The backing storage could not be reached or read.
    #[error("Store unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// Stored contents failed to deserialize.
    #[error("Corrupt store contents: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// A named model or version does not exist.
    #[error("Model '{name}' version {version} not found")]
    NotFound { name: String, version: u32 },
}
