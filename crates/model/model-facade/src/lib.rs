//! Model Facade
//!
//! High-level API for training and applying AQI regression models.
//! Re-exports all public types from the model stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use model_facade::prelude::*;
//!
//! let trainer = ModelTrainer::with_defaults();
//! let outcome = trainer.train(&x, &y)?;
//! let prediction = outcome.model.predict(&features)?;
//! ```

// Re-export everything from core, plus the API and SPI surfaces
pub use model_core::*;

pub use model_api::TrainConfig;
pub use model_spi::{Candidate, ModelError, ModelMetrics, Regressor, Result, TrainingReport};

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use model_spi::Regressor;

    // Models and errors
    pub use model_spi::{Candidate, ModelError, ModelMetrics, Result, TrainingReport};

    // Configuration
    pub use model_api::TrainConfig;

    // Implementations
    pub use model_core::{
        GradientBoosting, KnnRegressor, ModelTrainer, RidgeRegression, TrainedRegressor,
        TrainingOutcome, MIN_TRAINING_ROWS,
    };
}
