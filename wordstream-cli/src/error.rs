//! Error handling for the CLI application

use std::path::PathBuf;
use thiserror::Error;
use wordstream_core::StreamError;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// No input files matched the given patterns
    #[error("No files found matching the provided patterns")]
    NoInput,

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Segmentation of one file failed
    #[error("Processing error in {}: {source}", path.display())]
    ProcessingError {
        /// The file being processed
        path: PathBuf,
        /// The underlying pipeline error
        source: StreamError,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
