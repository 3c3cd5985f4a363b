//! Extraction Orchestrator
//!
//! Runs the per-item pipeline: recognize text, gate on tagged
//! quantity-like spans, parse measurements, resolve the entity value.
//! Each stage short-circuits to the empty prediction when the previous
//! stage produced nothing.

use crate::catalog::UnitCatalog;
use crate::error::{ExtractError, Result};
use crate::parser::MeasurementParser;
use crate::resolver::EntityResolver;
use crate::services::{SpanTagger, TextRecognizer};
use qex_common::types::EntityType;
use std::path::Path;
use tracing::debug;

/// Per-item extraction pipeline over injected recognizer and tagger
/// services.
///
/// Pure apart from the services' own I/O: given the same services and
/// image, `extract` always produces the same prediction.
pub struct QuantityExtractor<R, T> {
    parser: MeasurementParser,
    resolver: EntityResolver,
    recognizer: R,
    tagger: T,
}

impl<R: TextRecognizer, T: SpanTagger> QuantityExtractor<R, T> {
    pub fn new(recognizer: R, tagger: T) -> Self {
        let catalog = UnitCatalog::new();
        Self {
            parser: MeasurementParser::new(&catalog),
            resolver: EntityResolver::new(catalog),
            recognizer,
            tagger,
        }
    }

    /// The canonical prediction for `entity` in the image at `image_path`,
    /// or `""` when no confident value is found.
    ///
    /// A missing image artifact or a failing service is an error; an image
    /// that simply contains no usable quantity is not.
    pub async fn extract(&self, image_path: &Path, entity: EntityType) -> Result<String> {
        if !image_path.exists() {
            return Err(ExtractError::ImageNotFound(image_path.to_path_buf()));
        }

        let fragments = self.recognizer.read_text(image_path).await?;
        let text = fragments.join(" ");
        if text.is_empty() {
            return Ok(String::new());
        }

        // The tagger is a gate: without quantity-like spans there is no
        // answer, even if the raw text would parse. Precision over recall.
        let spans = self.tagger.tag_spans(&text).await?;
        let quantity_text = spans
            .iter()
            .filter(|s| s.is_quantity())
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        if quantity_text.is_empty() {
            debug!(image = %image_path.display(), "No quantity-like spans tagged");
            return Ok(String::new());
        }

        let candidates = self.parser.parse(&quantity_text);
        Ok(self.resolver.resolve(entity, &candidates))
    }
}
