//! Error types for the extraction pipeline
//!
//! "No confident value found" is not an error: it is encoded as an empty
//! prediction string. Errors here are the conditions that are fatal for
//! the row being processed: a missing image artifact or a failing
//! recognizer/tagger service.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Error type for the extraction pipeline
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Image artifact is not present where the dataset says it should be
    #[error("Image not found: '{0}'. Run 'qex fetch' (and 'qex enhance') before processing.")]
    ImageNotFound(PathBuf),

    /// Text recognizer service returned a failure
    #[error("Text recognizer error: {0}")]
    Recognizer(String),

    /// Span tagger service returned a failure
    #[error("Span tagger error: {0}")]
    Tagger(String),

    /// HTTP transport failure talking to a service
    #[error("Service request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ExtractError {
    /// Create a recognizer error
    pub fn recognizer(msg: impl Into<String>) -> Self {
        Self::Recognizer(msg.into())
    }

    /// Create a tagger error
    pub fn tagger(msg: impl Into<String>) -> Self {
        Self::Tagger(msg.into())
    }
}
