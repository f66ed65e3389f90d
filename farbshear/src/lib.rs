//! farbshear - Shear-based rotation filter
//!
//! Reads a farbfeld-style raster stream, rotates it by composing
//! axis-aligned shears with toroidal wraparound, and writes a stream of
//! the same dimensions.
//!
//! # Overview
//!
//! - [`Pixel`] / [`PixelGrid`] - pixel records and the in-memory frame
//! - [`io`] - header codec and bulk pixel loading
//! - [`transform`] - shear derivation and pixel remapping
//! - [`app`] / [`cli`] - the process driver behind the `farbshear` binary
//!
//! # Example
//!
//! ```
//! use farbshear::transform::ShearInput;
//! use farbshear::{Pixel, PixelGrid};
//! use std::io::Cursor;
//!
//! let grid = PixelGrid::from_fn(2, 2, |x, y| Pixel::splat((x + 2 * y) as u8)).unwrap();
//! let mut input = Vec::new();
//! farbshear::io::write_image(&mut input, farbshear::io::FARBFELD_MAGIC, &grid).unwrap();
//!
//! let mut output = Vec::new();
//! farbshear::app::run(ShearInput::Angle(0.0), &mut Cursor::new(&input), &mut output).unwrap();
//! assert_eq!(output, input);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use farbshear_core::{Error, PIXEL_SIZE, Pixel, PixelGrid, Result, grid, pixel};

// Re-export domain crates as modules to avoid name conflicts
pub use farbshear_io as io;
pub use farbshear_transform as transform;

pub mod app;
pub mod cli;
mod error;

pub use error::{Error as AppError, ErrorKind, Result as AppResult};
