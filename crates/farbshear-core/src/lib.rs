//! farbshear Core - Pixel containers for the shear-rotation filter
//!
//! This crate provides the data structures shared by the rest of the
//! workspace:
//!
//! - [`Pixel`] - An opaque 8-byte pixel record
//! - [`PixelGrid`] - A row-major, bounds-checked frame of pixels
//! - [`Error`] / [`Result`] - Allocation and addressing failures

pub mod error;
pub mod grid;
pub mod pixel;

pub use error::{Error, Result};
pub use grid::PixelGrid;
pub use pixel::{PIXEL_SIZE, Pixel};
