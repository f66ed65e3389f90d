//! Error types for farbshear-core
//!
//! Provides a unified error type for the pixel containers.
//! Each variant captures enough context for diagnostics without exposing
//! internal buffer layout.

use thiserror::Error;

/// farbshear-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel buffer could not be sized or reserved
    #[error("memory allocation failed for {width}x{height} image")]
    AllocationFailed { width: u32, height: u32 },

    /// Coordinate outside the grid
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw buffer length does not match the declared dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
