//! `qex worker` command implementation
//!
//! One bounded-lifetime pipeline pass: construct the HTTP-backed
//! recognizer and tagger, then run the batch runner until the next
//! checkpoint boundary or the end of the dataset.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::runner::{self, RunOutcome};
use qex_extract::remote::{RemoteRecognizer, RemoteTagger};
use qex_extract::QuantityExtractor;

/// Run a single worker pass
pub async fn run(config: PipelineConfig) -> Result<RunOutcome> {
    let recognizer = RemoteRecognizer::new(config.recognizer_url.clone(), config.request_timeout)?;
    let tagger = RemoteTagger::new(config.tagger_url.clone(), config.request_timeout)?;
    let extractor = QuantityExtractor::new(recognizer, tagger);

    runner::run_worker(&config, &extractor).await
}
