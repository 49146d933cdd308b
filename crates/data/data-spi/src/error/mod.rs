//! Error types for data source operations.

mod data_error;

pub use data_error::{DataError, Result};
