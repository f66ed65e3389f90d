//! Error types for farbshear-transform

use thiserror::Error;

/// Errors that can occur while deriving or applying a shear rotation
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] farbshear_core::Error),

    /// Writing the output stream failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
