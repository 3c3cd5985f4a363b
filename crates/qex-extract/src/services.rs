//! External service interfaces
//!
//! The text recognizer and entity span tagger are opaque collaborators:
//! possibly slow, possibly failing, and owned by whoever constructs the
//! extractor. They are traits so tests can inject fakes; production code
//! uses the HTTP-backed implementations in [`crate::remote`].

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Label the span tagger uses for quantity-like spans. Spans with any
/// other label are ignored by the pipeline.
pub const QUANTITY_LABEL: &str = "QUANTITY";

/// A labeled span of text returned by the tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSpan {
    pub text: String,
    pub label: String,
}

impl TaggedSpan {
    /// Whether this span was tagged as quantity-like.
    pub fn is_quantity(&self) -> bool {
        self.label == QUANTITY_LABEL
    }
}

/// Reads text from a local image artifact.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Recognized text fragments, in the order the recognizer emits them.
    async fn read_text(&self, image: &Path) -> Result<Vec<String>>;
}

/// Tags spans of text with classification labels.
#[async_trait]
pub trait SpanTagger: Send + Sync {
    /// Labeled spans found in `text`.
    async fn tag_spans(&self, text: &str) -> Result<Vec<TaggedSpan>>;
}
