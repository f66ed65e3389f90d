//! I/O error types
//!
//! Provides a unified error type for reading and writing the raster
//! stream. Short reads are reported as [`IoError::TruncatedInput`] rather
//! than surfacing as a bare `UnexpectedEof`.

use thiserror::Error;

/// Error type for stream I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (broken pipe, closed descriptor, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before the declared amount of data was read
    #[error("truncated input: expected {expected} bytes of {what}, got {actual}")]
    TruncatedInput {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An error from the core library (e.g. allocation failure)
    #[error("core error: {0}")]
    Core(#[from] farbshear_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
