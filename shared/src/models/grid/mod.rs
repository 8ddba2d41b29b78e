use std::fmt;

use complex_rs::complex::Complex;
use thiserror::Error;

use super::block::Block;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("{name} must be strictly positive")]
    ZeroDimension { name: &'static str },

    #[error("height {height} is not a multiple of the block height {block_height}")]
    UnevenBlocks { height: u32, block_height: u32 },

    #[error("domain bound {name} is not a finite number")]
    NonFiniteBound { name: &'static str },

    #[error("image of {width}x{height} pixels does not fit a raster file")]
    TooLarge { width: u32, height: u32 },

    #[error("block {index} is out of range, the grid has {n_blocks} blocks")]
    BlockOutOfRange { index: u32, n_blocks: u32 },
}

pub type GridResult<T> = Result<T, GridError>;

/// Immutable description of the computation: image size, complex domain,
/// iteration bound and the height of the strips handed to workers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    pub max_iteration: u32,
    pub block_height: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            xmin: -2.0,
            ymin: -2.0,
            xmax: 2.0,
            ymax: 2.0,
            max_iteration: 10_000,
            block_height: 8,
        }
    }
}

impl Grid {
    /// Checks every configuration invariant and hands the grid back.
    pub fn validated(self) -> GridResult<Self> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("max iteration", self.max_iteration),
            ("block height", self.block_height),
        ] {
            if value == 0 {
                return Err(GridError::ZeroDimension { name });
            }
        }

        for (name, value) in [
            ("xmin", self.xmin),
            ("ymin", self.ymin),
            ("xmax", self.xmax),
            ("ymax", self.ymax),
        ] {
            if !value.is_finite() {
                return Err(GridError::NonFiniteBound { name });
            }
        }

        if self.height % self.block_height != 0 {
            return Err(GridError::UnevenBlocks {
                height: self.height,
                block_height: self.block_height,
            });
        }

        // The raster header stores the pixel byte count as a u32.
        if u64::from(self.width) * u64::from(self.height) > u64::from(u32::MAX) {
            return Err(GridError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }

        Ok(self)
    }

    pub fn xinc(&self) -> f64 {
        increment(self.xmin, self.xmax, self.width)
    }

    pub fn yinc(&self) -> f64 {
        increment(self.ymin, self.ymax, self.height)
    }

    pub fn n_blocks(&self) -> u32 {
        self.height / self.block_height
    }

    /// Bytes in one block, `width * block_height`.
    pub fn block_len(&self) -> usize {
        self.width as usize * self.block_height as usize
    }

    /// Bytes in the whole image, `width * height`.
    pub fn image_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn block(&self, index: u32) -> GridResult<Block> {
        let n_blocks = self.n_blocks();
        if index >= n_blocks {
            return Err(GridError::BlockOutOfRange { index, n_blocks });
        }
        Ok(Block::new(index, self.block_height))
    }

    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        (0..self.n_blocks()).map(|index| Block::new(index, self.block_height))
    }

    /// Point of the complex plane sampled by pixel `(column, row)`.
    ///
    /// Coordinates are derived from the indices rather than accumulated, so
    /// a pixel maps to the same point whatever block it ends up in.
    pub fn point(&self, column: u32, row: u32) -> Complex {
        Complex::new(
            self.xmin + f64::from(column) * self.xinc(),
            self.ymin + f64::from(row) * self.yinc(),
        )
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{[{},{}]x[{},{}]}} {}x{} max iteration {} block height {}",
            self.xmin,
            self.ymin,
            self.xmax,
            self.ymax,
            self.width,
            self.height,
            self.max_iteration,
            self.block_height
        )
    }
}

fn increment(min: f64, max: f64, samples: u32) -> f64 {
    // A single sample sits on the lower bound.
    if samples > 1 {
        (max - min) / f64::from(samples - 1)
    } else {
        0.0
    }
}
