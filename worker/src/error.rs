use shared::{models::grid::GridError, networking::error::NetworkingError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("could not allocate a block buffer of {bytes} bytes")]
    Allocation { bytes: usize },

    #[error("coordinator went away without sending the stop sentinel")]
    CoordinatorGone,

    #[error(transparent)]
    Networking(#[from] NetworkingError),

    #[error("block computation did not finish: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type WorkerResult<T> = Result<T, WorkerError>;
