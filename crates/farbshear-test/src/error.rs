//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture grid could not be created
    #[error("fixture error: {0}")]
    Core(#[from] farbshear_core::Error),

    /// Fixture stream could not be encoded
    #[error("stream error: {0}")]
    Stream(#[from] farbshear_io::IoError),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
