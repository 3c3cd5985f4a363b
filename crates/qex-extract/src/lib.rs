//! QEX Extraction Library
//!
//! Turns recognized text from a product image into a disambiguated,
//! unit-normalized quantity for a requested entity attribute.
//!
//! # Pipeline
//!
//! For each image the [`QuantityExtractor`] runs:
//!
//! 1. **Text recognition** ([`services::TextRecognizer`]) - raw text
//!    fragments from the image artifact.
//! 2. **Span tagging** ([`services::SpanTagger`]) - quantity-like spans.
//!    The tagger is a gate: no tagged spans means no answer, the full
//!    text is never parsed as a fallback.
//! 3. **Measurement parsing** ([`parser::MeasurementParser`]) - `(value,
//!    unit)` candidates from the tagged spans.
//! 4. **Entity resolution** ([`resolver::EntityResolver`]) - the first
//!    candidate whose unit is valid for the requested entity, rendered in
//!    canonical full-word form.
//!
//! Both services are injected, so tests run the pipeline against fakes.
//!
//! # Example
//!
//! ```no_run
//! use qex_common::types::EntityType;
//! use qex_extract::{remote::{RemoteRecognizer, RemoteTagger}, QuantityExtractor};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let recognizer = RemoteRecognizer::new("http://localhost:9001".into(), None)?;
//!     let tagger = RemoteTagger::new("http://localhost:9002".into(), None)?;
//!     let extractor = QuantityExtractor::new(recognizer, tagger);
//!
//!     let prediction = extractor
//!         .extract(Path::new("./images/61lEWJUm0bL.jpg"), EntityType::Width)
//!         .await?;
//!     println!("prediction: {prediction:?}");
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod orchestrator;
pub mod parser;
pub mod remote;
pub mod resolver;
pub mod services;

// Re-export the main entry points
pub use error::{ExtractError, Result};
pub use orchestrator::QuantityExtractor;
