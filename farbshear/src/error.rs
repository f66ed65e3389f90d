//! Error types for the farbshear driver
//!
//! Wraps the errors of the lower crates and adds usage failures. Every
//! error is fatal: the binary prints it and exits with status 1.

use farbshear_io::IoError;
use farbshear_transform::TransformError;
use thiserror::Error;

/// Driver error type
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong argument count or malformed argument
    #[error("usage: {0}")]
    Usage(String),

    /// Reading the input or writing the output failed
    #[error(transparent)]
    Io(#[from] IoError),

    /// Shear derivation or remapping failed
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Failure categories reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong argument count or unparseable argument
    Usage,
    /// Frame buffer could not be sized or reserved
    Allocation,
    /// Input ended before the declared header or pixel data
    TruncatedInput,
    /// Shear parameters unusable for this frame
    InvalidShear,
    /// Any other stream failure
    Io,
}

impl Error {
    /// Categorize the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Usage(_) => ErrorKind::Usage,
            Error::Io(IoError::TruncatedInput { .. }) => ErrorKind::TruncatedInput,
            Error::Io(IoError::Core(farbshear_core::Error::AllocationFailed { .. }))
            | Error::Transform(TransformError::Core(farbshear_core::Error::AllocationFailed {
                ..
            })) => ErrorKind::Allocation,
            Error::Transform(TransformError::InvalidParameters(_)) => ErrorKind::InvalidShear,
            Error::Io(_) | Error::Transform(_) => ErrorKind::Io,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, Error>;
