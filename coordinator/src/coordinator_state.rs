use shared::models::{
    fragments::{assignment::Assignment, envelope::Envelope},
    grid::Grid,
};

use crate::error::{CoordinatorError, CoordinatorResult};

/// Bookkeeping of a pull-based run: the image being assembled, the next
/// block to hand out and which blocks have come back.
#[derive(Debug)]
pub struct CoordinatorState {
    grid: Grid,
    image: Vec<u8>,
    received: Vec<bool>,
    n_blocks: u32,
    next_to_assign: u32,
    completed: u32,
}

impl CoordinatorState {
    pub fn new(grid: Grid) -> CoordinatorResult<Self> {
        let bytes = grid.image_len();
        let mut image = Vec::new();
        image
            .try_reserve_exact(bytes)
            .map_err(|_| CoordinatorError::Allocation { bytes })?;
        image.resize(bytes, 0);

        let n_blocks = grid.n_blocks();
        Ok(Self {
            grid,
            image,
            received: vec![false; n_blocks as usize],
            n_blocks,
            next_to_assign: 0,
            completed: 0,
        })
    }

    /// Hands out the lowest block not yet assigned, or the stop sentinel
    /// once every block has been assigned.
    pub fn next_assignment(&mut self) -> Assignment {
        if self.next_to_assign < self.n_blocks {
            let index = self.next_to_assign;
            self.next_to_assign += 1;
            Assignment::Block(index)
        } else {
            Assignment::Stop
        }
    }

    /// Copies a returned block into the image at the offset of its index.
    /// Arrival order does not matter.
    pub fn accept(&mut self, envelope: Envelope) -> CoordinatorResult<()> {
        let Envelope { worker, result } = envelope;
        let index = result.block_index;

        if index >= self.next_to_assign {
            return Err(CoordinatorError::UnknownBlock { worker, index });
        }
        if self.received[index as usize] {
            return Err(CoordinatorError::DuplicateBlock { worker, index });
        }

        let expected = self.grid.block_len();
        if result.pixels.len() != expected {
            return Err(CoordinatorError::BlockLength {
                worker,
                index,
                expected,
                actual: result.pixels.len(),
            });
        }

        let block = self.grid.block(index)?;
        let offset = block.offset(self.grid.width);
        self.image[offset..offset + expected].copy_from_slice(&result.pixels);
        self.received[index as usize] = true;
        self.completed += 1;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.completed == self.n_blocks
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn missing(&self) -> u32 {
        self.n_blocks - self.completed
    }

    pub fn into_image(self) -> Vec<u8> {
        self.image
    }
}
