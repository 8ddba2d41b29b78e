use shared::{
    models::{fragments::envelope::WorkerId, grid::GridError},
    networking::error::NetworkingError,
    raster::RasterError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("configuration error: {0}")]
    Grid(#[from] GridError),

    #[error("could not allocate an image buffer of {bytes} bytes")]
    Allocation { bytes: usize },

    #[error("at least one worker is needed")]
    NoWorkers,

    #[error("worker {worker} is gone and cannot receive its next assignment")]
    WorkerGone { worker: WorkerId },

    #[error("result from unknown worker {worker}")]
    UnknownWorker { worker: WorkerId },

    #[error("worker {worker} returned block {index}, which was never assigned")]
    UnknownBlock { worker: WorkerId, index: u32 },

    #[error("worker {worker} returned block {index} a second time")]
    DuplicateBlock { worker: WorkerId, index: u32 },

    #[error("worker {worker} returned {actual} bytes for block {index}, expected {expected}")]
    BlockLength {
        worker: WorkerId,
        index: u32,
        expected: usize,
        actual: usize,
    },

    #[error("all workers disconnected with {missing} blocks still missing")]
    WorkersDisconnected { missing: u32 },

    #[error(transparent)]
    Networking(#[from] NetworkingError),

    #[error(transparent)]
    Raster(#[from] RasterError),
}

pub type CoordinatorResult<T> = Result<T, CoordinatorError>;
