pub mod feature_store;
pub mod model_registry;

pub use feature_store::FeatureStore;
pub use model_registry::ModelRegistry;
