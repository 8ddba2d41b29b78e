//! Sun rasterfile output: a 32-byte big-endian header, an RGB color map
//! stored channel by channel, then one byte per pixel.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};
use thiserror::Error;

use crate::graphics::palette::{Palette, PALETTE_SIZE};

pub const RAS_MAGIC: u32 = 0x59a6_6a95;
pub const RT_STANDARD: u32 = 1;
pub const RMT_EQUAL_RGB: u32 = 1;
pub const HEADER_LEN: usize = 32;
pub const MAP_LENGTH: u32 = (3 * PALETTE_SIZE) as u32;

/// File name used when none is given.
pub const DEFAULT_OUTPUT: &str = "mandel.ras";

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("could not create {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("pixel buffer holds {actual} bytes, a {width}x{height} image needs {expected}")]
    BufferLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("not an 8-bit indexed rasterfile header")]
    BadHeader,
}

pub type RasterResult<T> = Result<T, RasterError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterHeader {
    pub magic: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub length: u32,
    pub file_type: u32,
    pub map_type: u32,
    pub map_length: u32,
}

impl RasterHeader {
    /// Header of an 8-bit image with an equal-RGB color map.
    pub fn indexed(width: u32, height: u32) -> Self {
        Self {
            magic: RAS_MAGIC,
            width,
            height,
            depth: 8,
            length: width.saturating_mul(height),
            file_type: RT_STANDARD,
            map_type: RMT_EQUAL_RGB,
            map_length: MAP_LENGTH,
        }
    }

    fn fields(&self) -> [u32; 8] {
        [
            self.magic,
            self.width,
            self.height,
            self.depth,
            self.length,
            self.file_type,
            self.map_type,
            self.map_length,
        ]
    }

    /// Every field big-endian, whatever the host byte order.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        for (chunk, field) in bytes.chunks_exact_mut(4).zip(self.fields()) {
            chunk.copy_from_slice(&field.to_be_bytes());
        }
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> RasterResult<Self> {
        let header = bytes.get(..HEADER_LEN).ok_or(RasterError::BadHeader)?;
        let mut fields = header
            .chunks_exact(4)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        let mut next = || fields.next().ok_or(RasterError::BadHeader);

        let header = Self {
            magic: next()?,
            width: next()?,
            height: next()?,
            depth: next()?,
            length: next()?,
            file_type: next()?,
            map_type: next()?,
            map_length: next()?,
        };
        if header.magic != RAS_MAGIC || header.depth != 8 {
            return Err(RasterError::BadHeader);
        }
        Ok(header)
    }
}

/// Writes a complete rasterfile to `out`.
///
/// Each color map channel is written from index 255 down to index 0, so
/// file slot `k` holds the color of index `255 - k`.
pub fn write_rasterfile<W: Write>(
    out: &mut W,
    width: u32,
    height: u32,
    pixels: &[u8],
    palette: &Palette,
) -> io::Result<()> {
    out.write_all(&RasterHeader::indexed(width, height).to_bytes())?;

    for channel in [&palette.red, &palette.green, &palette.blue] {
        let reversed: Vec<u8> = channel.iter().rev().copied().collect();
        out.write_all(&reversed)?;
    }

    out.write_all(pixels)?;
    out.flush()
}

/// Creates `path` and writes the image to it. A file left behind by a
/// failed write is removed.
pub fn save_rasterfile(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    pixels: &[u8],
    palette: &Palette,
) -> RasterResult<()> {
    let path = path.as_ref();
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(RasterError::BufferLength {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }

    let file = File::create(path).map_err(|source| RasterError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = BufWriter::new(file);
    if let Err(source) = write_rasterfile(&mut out, width, height, pixels, palette) {
        drop(out);
        if let Err(e) = fs::remove_file(path) {
            warn!("Could not remove partial file {}: {}", path.display(), e);
        }
        return Err(RasterError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!("Wrote {}x{} rasterfile to {}", width, height, path.display());
    Ok(())
}

/// Reads back the header of a rasterfile.
pub fn read_header(path: impl AsRef<Path>) -> RasterResult<RasterHeader> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| RasterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    RasterHeader::from_bytes(&bytes)
}
