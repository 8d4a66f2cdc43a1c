//! Error types for the search pipeline.

use crate::compute::geo_math::BoundsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NearbyError>;

#[derive(Debug, Error)]
pub enum NearbyError {
    /// A request value is malformed or out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A filter value could not be interpreted. The pipeline answers with an
    /// empty result instead of failing the request.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Bounding box unavailable: {0}")]
    Bounds(#[from] BoundsError),

    /// The storage round trip failed. Not retried.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NearbyError {
    /// Errors caused by the caller's request rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, NearbyError::InvalidInput(_) | NearbyError::InvalidFilter(_))
    }
}
