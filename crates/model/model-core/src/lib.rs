//! Model core implementations
//!
//! Concrete regressors and the candidate trainer:
//! - [`RidgeRegression`]: L2-regularised linear regression
//! - [`GradientBoosting`]: boosted regression trees
//! - [`KnnRegressor`]: inverse-distance-weighted nearest neighbours
//! - [`ModelTrainer`]: fits every candidate and keeps the best by RMSE

pub mod boosting;
pub mod knn;
pub mod metrics;
pub mod ridge;
pub mod split;
pub mod trained;
pub mod trainer;
pub mod tree;

pub use boosting::GradientBoosting;
pub use knn::KnnRegressor;
pub use metrics::{mae, r2_score, rmse};
pub use ridge::RidgeRegression;
pub use split::train_test_split;
pub use trained::TrainedRegressor;
pub use trainer::{ModelTrainer, TrainingOutcome, MIN_TRAINING_ROWS};
