use thiserror::Error;

use pickup_core::LocationId;
use pickup_network::NetworkError;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no friend can be picked up between {start} and {destination}")]
    NoPickup { start: LocationId, destination: LocationId },

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type PlanResult<T> = Result<T, PlanError>;
