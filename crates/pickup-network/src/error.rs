//! Network-subsystem error type.

use thiserror::Error;

use pickup_core::{CoreError, HeapError, LocationId};

/// Errors produced by `pickup-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("city map has no roads")]
    EmptyNetwork,

    #[error("location {location} is outside the map (max {max})")]
    LocationOutOfRange { location: LocationId, max: LocationId },

    #[error("no route from {from} to {to}")]
    NoRoute { from: LocationId, to: LocationId },

    #[error("routing queue failure: {0}")]
    Heap(#[from] HeapError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("city input parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
