pub mod candidate;
pub mod metrics;
pub mod training_report;

pub use candidate::Candidate;
pub use metrics::ModelMetrics;
pub use training_report::TrainingReport;
