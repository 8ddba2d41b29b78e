use std::ops::Range;

/// A horizontal strip of `height` consecutive image rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub index: u32,
    pub height: u32,
}

impl Block {
    pub fn new(index: u32, height: u32) -> Self {
        Self { index, height }
    }

    pub fn first_row(&self) -> u32 {
        self.index * self.height
    }

    pub fn rows(&self) -> Range<u32> {
        self.first_row()..self.first_row() + self.height
    }

    /// Byte offset of the block's first pixel in a row-major image buffer.
    pub fn offset(&self, width: u32) -> usize {
        self.first_row() as usize * width as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_one_strip() {
        let block = Block::new(3, 8);
        assert_eq!(block.rows(), 24..32);
        assert_eq!(block.offset(800), 24 * 800);
    }

    #[test]
    fn first_block_starts_at_zero() {
        assert_eq!(Block::new(0, 1).offset(17), 0);
        assert_eq!(Block::new(0, 1).rows().len(), 1);
    }
}
