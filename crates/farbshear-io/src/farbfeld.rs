//! Farbfeld raster stream support
//!
//! Reads and writes a header block followed by `width * height` pixel
//! records of 8 bytes each, row-major, top to bottom and left to right.
//! Channel contents are never interpreted.

use crate::header::{FrameHeader, read_header, write_header};
use crate::{IoError, IoResult};
use farbshear_core::PixelGrid;
use std::io::{Read, Write};

/// Allocate a grid for `width` x `height` and bulk-load it from a reader.
///
/// The buffer is only reserved up front and grows as bytes arrive, so a
/// header that declares a huge frame over a short body fails without
/// touching the whole reservation.
///
/// # Errors
///
/// - [`IoError::Core`](crate::IoError::Core) wrapping
///   `AllocationFailed` if the frame size overflows or cannot be reserved
/// - [`IoError::TruncatedInput`](crate::IoError::TruncatedInput) if fewer
///   bytes are available than the dimensions require
pub fn read_pixels<R: Read>(reader: &mut R, width: u32, height: u32) -> IoResult<PixelGrid> {
    let len = PixelGrid::byte_len(width, height)?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| farbshear_core::Error::AllocationFailed { width, height })?;

    reader.take(len as u64).read_to_end(&mut data)?;
    if data.len() < len {
        return Err(IoError::TruncatedInput {
            what: "pixel data",
            expected: len,
            actual: data.len(),
        });
    }

    let grid = PixelGrid::from_raw(width, height, data)?;
    log::debug!("loaded {} pixels", grid.pixel_count());
    Ok(grid)
}

/// Read a complete image: header block plus pixel data.
pub fn read_image<R: Read>(reader: &mut R) -> IoResult<(FrameHeader, PixelGrid)> {
    let header = read_header(reader)?;
    let grid = read_pixels(reader, header.width, header.height)?;
    Ok((header, grid))
}

/// Write the raster bytes of a grid.
pub fn write_pixels<W: Write>(writer: &mut W, grid: &PixelGrid) -> IoResult<()> {
    writer.write_all(grid.data())?;
    Ok(())
}

/// Write a complete image using the given magic tag and the grid's dimensions.
pub fn write_image<W: Write>(writer: &mut W, magic: [u8; 8], grid: &PixelGrid) -> IoResult<()> {
    let header = FrameHeader {
        magic,
        width: grid.width(),
        height: grid.height(),
    };
    write_header(writer, &header)?;
    write_pixels(writer, grid)
}
