//! PixelGrid - the in-memory frame
//!
//! A row-major grid of [`Pixel`] records, loaded once and read-only while
//! the transform runs.
//!
//! # Layout
//!
//! - Rows are stored top to bottom, pixels left to right
//! - Each pixel occupies [`PIXEL_SIZE`] consecutive bytes
//! - There is no row padding: the byte length is exactly
//!   `width * height * PIXEL_SIZE`
//!
//! A grid with zero width or height is valid and holds no pixels.

use crate::error::{Error, Result};
use crate::pixel::{PIXEL_SIZE, Pixel};

/// Owned, bounds-checked frame of 8-byte pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Number of bytes a `width` x `height` frame occupies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the size does not fit in `usize`.
    pub fn byte_len(width: u32, height: u32) -> Result<usize> {
        usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .and_then(|n| n.checked_mul(PIXEL_SIZE))
            .ok_or(Error::AllocationFailed { width, height })
    }

    /// Allocate a zero-filled grid.
    ///
    /// The buffer is reserved with `try_reserve_exact`, so an impossible
    /// request is reported instead of aborting the process.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the byte size overflows or the
    /// memory cannot be obtained.
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed { width, height })?;
        data.resize(len, 0);
        Ok(PixelGrid {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing raster buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data` is not exactly
    /// `width * height * PIXEL_SIZE` bytes long.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelGrid {
            width,
            height,
            data,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        let mut grid = Self::try_new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                grid.set_unchecked(x, y, f(x, y));
            }
        }
        Ok(grid)
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the grid.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / PIXEL_SIZE
    }

    /// True if the grid holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * PIXEL_SIZE
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without the explicit bounds check.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the buffer.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> Pixel {
        let off = self.offset(x, y);
        let mut bytes = [0u8; PIXEL_SIZE];
        bytes.copy_from_slice(&self.data[off..off + PIXEL_SIZE]);
        Pixel(bytes)
    }

    /// Raw bytes of the pixel at (x, y), borrowed from the grid.
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[inline]
    pub fn pixel_bytes(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = self.offset(x, y);
        Some(&self.data[off..off + PIXEL_SIZE])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is out of bounds.
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set the pixel at (x, y) without the explicit bounds check.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the buffer.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, pixel: Pixel) {
        let off = self.offset(x, y);
        self.data[off..off + PIXEL_SIZE].copy_from_slice(&pixel.0);
    }

    /// Raw bytes of row `y`.
    ///
    /// Returns `None` if `y` is out of bounds.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = self.offset(0, y);
        let len = self.width as usize * PIXEL_SIZE;
        Some(&self.data[start..start + len])
    }

    /// Iterate the pixels in raster order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data.chunks_exact(PIXEL_SIZE).map(|chunk| {
            let mut bytes = [0u8; PIXEL_SIZE];
            bytes.copy_from_slice(chunk);
            Pixel(bytes)
        })
    }

    /// Get raw access to the raster data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_zeroed() {
        let grid = PixelGrid::try_new(3, 2).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixel_count(), 6);
        assert_eq!(grid.data().len(), 48);
        assert!(grid.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_area_grid() {
        let grid = PixelGrid::try_new(0, 5).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.row(0), Some(&[][..]));
    }

    #[test]
    fn test_byte_len_overflow() {
        // u32::MAX * u32::MAX * 8 does not fit in 64 bits
        let err = PixelGrid::byte_len(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, Error::AllocationFailed { .. }));
    }

    #[test]
    fn test_try_new_impossible_allocation() {
        // Fits in usize on 64-bit targets but no allocator can satisfy it
        let result = PixelGrid::try_new(u32::MAX, u32::MAX / 16);
        assert!(matches!(result, Err(Error::AllocationFailed { .. })));
    }

    #[test]
    fn test_get_set() {
        let mut grid = PixelGrid::try_new(4, 4).unwrap();
        let px = Pixel::new([1, 2, 3, 4, 5, 6, 7, 8]);
        grid.set(2, 3, px).unwrap();
        assert_eq!(grid.get(2, 3), Some(px));
        assert_eq!(grid.get(3, 2), Some(Pixel::default()));
        assert_eq!(grid.pixel_bytes(2, 3), Some(&px.0[..]));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = PixelGrid::try_new(4, 4).unwrap();
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 4), None);
        assert!(matches!(
            grid.set(0, 4, Pixel::splat(1)),
            Err(Error::IndexOutOfBounds { x: 0, y: 4, .. })
        ));
    }

    #[test]
    fn test_row_major_layout() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| Pixel::splat((y * 3 + x) as u8)).unwrap();
        let firsts: Vec<u8> = grid.data().chunks(8).map(|c| c[0]).collect();
        assert_eq!(firsts, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(grid.row(1).unwrap()[0], 3);
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_from_raw_size_check() {
        assert!(PixelGrid::from_raw(2, 2, vec![0; 32]).is_ok());
        let err = PixelGrid::from_raw(2, 2, vec![0; 31]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSizeMismatch {
                expected: 32,
                actual: 31
            }
        ));
    }

    #[test]
    fn test_pixels_iter_matches_get() {
        let grid = PixelGrid::from_fn(2, 2, |x, y| Pixel::splat((10 * y + x) as u8)).unwrap();
        let collected: Vec<Pixel> = grid.pixels().collect();
        assert_eq!(
            collected,
            vec![
                Pixel::splat(0),
                Pixel::splat(1),
                Pixel::splat(10),
                Pixel::splat(11)
            ]
        );
    }
}
