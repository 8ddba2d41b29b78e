use super::block_result::BlockResult;

/// Index of a worker in the coordinator's pool.
pub type WorkerId = usize;

/// A result as seen by the coordinator's any-source receive: the message
/// plus the worker it came from, so the reply can go back to that worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub worker: WorkerId,
    pub result: BlockResult,
}

impl Envelope {
    pub fn new(worker: WorkerId, result: BlockResult) -> Self {
        Self { worker, result }
    }
}
