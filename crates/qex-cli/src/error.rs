//! Error types for the QEX CLI
//!
//! Errors are user-facing: messages say what went wrong and what to do
//! about it. Everything here is fatal for the current process instance;
//! recoverable "no value found" conditions never surface as errors, they
//! are encoded as empty predictions in the ledger.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Dataset file could not be read or a row is malformed
    #[error("Dataset error: {0}. Check the CSV has columns index, image_link, entity_name with one record per line.")]
    Dataset(#[from] csv::Error),

    /// A zero batch size would divide by zero at the checkpoint cadence
    /// check and could never checkpoint anyway
    #[error("Batch size must be at least 1.")]
    InvalidBatchSize,

    /// Checkpoint file exists but does not hold a row index
    #[error("Corrupt checkpoint '{path}': expected a row index, found '{content}'. Delete the file to restart from the beginning (predictions already in the ledger will be duplicated).")]
    CorruptCheckpoint { path: PathBuf, content: String },

    /// Extraction pipeline failure (missing image, failing service)
    #[error(transparent)]
    Extract(#[from] qex_extract::ExtractError),

    /// The supervised worker died in an unexpected way
    #[error("Worker failed: {0}. Fix the cause and rerun; processing resumes from the last checkpoint.")]
    Worker(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP download failed
    #[error("Network request failed: {0}. Check your internet connection.")]
    Http(#[from] reqwest::Error),

    /// Image decode/encode failed
    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a worker error
    pub fn worker(msg: impl Into<String>) -> Self {
        Self::Worker(msg.into())
    }
}
