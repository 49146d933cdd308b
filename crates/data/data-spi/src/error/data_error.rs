//! Data error types.

use thiserror::Error;

/// Data source errors.
///
/// Provider responses that merely carry no usable data (non-200 status,
/// missing `hourly` block) are not errors; sources report those as an empty
/// [`crate::HourlySeries`]. These variants cover genuine failures: transport
/// problems, unparseable payloads, and malformed requests.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// HTTP request failed at the transport level
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a provider response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid date supplied in a request
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Series columns disagree with the time axis
    #[error("Malformed series: {0}")]
    MalformedSeries(String),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
