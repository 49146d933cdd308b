//! Store core implementations
//!
//! - [`LocalFeatureStore`]: one JSON file of rows per city
//! - [`LocalModelRegistry`]: versioned JSON artifacts on disk
//! - [`InMemoryFeatureStore`]: map-backed store for tests and demos

pub mod local;
pub mod memory;

pub use local::{LocalFeatureStore, LocalModelRegistry};
pub use memory::InMemoryFeatureStore;
