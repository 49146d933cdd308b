//! Model registry contract.

use model_spi::TrainingReport;

use crate::{RegisteredModel, Result};

/// Versioned storage for trained model artifacts.
///
/// Artifacts are opaque JSON documents; the registry never interprets
/// them. Versions for a name start at 1 and increase by one per
/// `create`.
pub trait ModelRegistry: Send + Sync {
    /// Store a new version of `name`. Returns the assigned version.
    fn create(
        &self,
        name: &str,
        artifact: serde_json::Value,
        report: &TrainingReport,
    ) -> Result<u32>;

    /// Fetch a specific version of `name`.
    fn get(&self, name: &str, version: u32) -> Result<RegisteredModel>;

    /// The highest stored version of `name`, or
    /// [`StoreError::NotFound`] when no version exists.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    fn latest_version(&self, name: &str) -> Result<u32>;
}
