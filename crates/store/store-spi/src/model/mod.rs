pub mod registered_model;

pub use registered_model::RegisteredModel;
