//! farbshear-test - Regression test framework for farbshear
//!
//! Provides [`RegParams`], which accumulates comparison results over a
//! whole regression test, plus synthetic fixtures so tests need no image
//! files on disk.
//!
//! # Usage
//!
//! ```ignore
//! use farbshear_test::{RegParams, gradient_grid};
//!
//! let mut rp = RegParams::new("shear");
//! let grid = gradient_grid(4, 4).expect("fixture");
//! rp.compare_values(16.0, grid.pixel_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use farbshear_core::{Pixel, PixelGrid};
use farbshear_io::FARBFELD_MAGIC;

/// Build a grid in which every pixel is distinct.
///
/// Each pixel stores its x coordinate in bytes 0..4 and y in bytes 4..8,
/// big-endian, so any remapping can be read back from the output.
pub fn gradient_grid(width: u32, height: u32) -> TestResult<PixelGrid> {
    Ok(PixelGrid::from_fn(width, height, |x, y| {
        let mut bytes = [0u8; 8];
        bytes[0..4].copy_from_slice(&x.to_be_bytes());
        bytes[4..8].copy_from_slice(&y.to_be_bytes());
        Pixel(bytes)
    })?)
}

/// Decode the coordinate label written by [`gradient_grid`].
pub fn gradient_label(pixel: Pixel) -> (u32, u32) {
    let b = pixel.0;
    (
        u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
        u32::from_be_bytes([b[4], b[5], b[6], b[7]]),
    )
}

/// Build a grid filled with one pixel value.
pub fn solid_grid(width: u32, height: u32, pixel: Pixel) -> TestResult<PixelGrid> {
    Ok(PixelGrid::from_fn(width, height, |_, _| pixel)?)
}

/// Encode a grid as a complete farbfeld stream (header plus pixels).
pub fn encode_stream(grid: &PixelGrid) -> TestResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(16 + grid.data().len());
    farbshear_io::write_image(&mut buf, FARBFELD_MAGIC, grid)?;
    Ok(buf)
}
