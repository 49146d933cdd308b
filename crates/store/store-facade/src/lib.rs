//! Store Facade
//!
//! High-level API for the local feature store and model registry.
//! Re-exports all public types from the store stack for convenient
//! usage.
//!
//! # Example
//!
//! ```ignore
//! use store_facade::prelude::*;
//!
//! let config = StoreConfig::new("data");
//! let store = LocalFeatureStore::new(&config);
//! store.insert(&rows)?;
//! let latest = store.read_latest("Karachi")?;
//! ```

// Re-export everything from core, plus the API and SPI surfaces
pub use store_core::*;

pub use store_api::StoreConfig;
pub use store_spi::{RegisteredModel, Result, StoreError};

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use store_spi::{FeatureStore, ModelRegistry};

    // Models and errors
    pub use store_spi::{RegisteredModel, Result, StoreError};

    // Configuration
    pub use store_api::StoreConfig;

    // Implementations
    pub use store_core::{InMemoryFeatureStore, LocalFeatureStore, LocalModelRegistry};
}
