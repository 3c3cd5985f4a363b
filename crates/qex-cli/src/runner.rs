//! Resumable Batch Runner
//!
//! Drives the extractor over the dataset's row ordering with persistent
//! state = checkpoint + output ledger. One pass is bounded: it ends at
//! the next checkpoint boundary (so the supervisor can recycle the
//! process) or at the end of the dataset.
//!
//! Rows are strictly sequential: a row is extracted, appended, and made
//! durable before the next row starts. Rows below the resume position
//! are skipped without consulting the ledger; the checkpoint is the only
//! source of truth for resumption. A crash between a ledger append and
//! the next checkpoint write therefore re-processes (and re-appends) up
//! to `batch_size - 1` rows on resume. That at-least-once behavior is
//! deliberate.

use crate::config::PipelineConfig;
use crate::dataset::{self, DatasetRow};
use crate::error::{CliError, Result};
use crate::{checkpoint, ledger::Ledger, progress};
use qex_common::types::ExtractionResult;
use qex_extract::services::{SpanTagger, TextRecognizer};
use qex_extract::QuantityExtractor;
use tracing::info;

/// How a worker pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every dataset row has been processed. No final checkpoint is
    /// written; a rerun walks the skips and completes again.
    Completed,
    /// A checkpoint was written at a batch boundary; the process should
    /// exit and be relaunched by the supervisor.
    CheckpointReached {
        /// The next row index to process, as persisted.
        next_index: u64,
    },
}

/// Run one bounded worker pass over the dataset.
pub async fn run_worker<R, T>(
    config: &PipelineConfig,
    extractor: &QuantityExtractor<R, T>,
) -> Result<RunOutcome>
where
    R: TextRecognizer,
    T: SpanTagger,
{
    if config.batch_size == 0 {
        return Err(CliError::InvalidBatchSize);
    }

    let resume_from = checkpoint::load(&config.checkpoint)?;
    let rows = dataset::read_rows(&config.dataset)?;
    let mut ledger = Ledger::open(&config.output)?;

    info!(
        resume_from,
        rows = rows.len(),
        batch_size = config.batch_size,
        "Worker pass starting"
    );

    let pb = progress::create_progress_bar(rows.len() as u64, "Processing rows");

    for row in &rows {
        if row.index < resume_from {
            // Pure skip: already-checkpointed rows are never re-validated.
            pb.inc(1);
            continue;
        }

        let prediction = process_row(config, extractor, row).await?;
        ledger.append(&ExtractionResult {
            index: row.index,
            prediction: prediction.clone(),
        })?;
        info!(index = row.index, prediction = %prediction, "Row completed");
        pb.inc(1);

        if (row.index + 1) % config.batch_size == 0 {
            let next_index = row.index + 1;
            checkpoint::store(&config.checkpoint, next_index)?;
            pb.abandon_with_message("Checkpoint reached".to_string());
            info!(next_index, "Checkpoint written; worker exiting for restart");
            return Ok(RunOutcome::CheckpointReached { next_index });
        }
    }

    pb.finish_with_message("Dataset complete".to_string());
    info!(output = %config.output.display(), "Processing completed");
    Ok(RunOutcome::Completed)
}

async fn process_row<R, T>(
    config: &PipelineConfig,
    extractor: &QuantityExtractor<R, T>,
    row: &DatasetRow,
) -> Result<String>
where
    R: TextRecognizer,
    T: SpanTagger,
{
    let image_path = config
        .images_dir
        .join(dataset::image_file_name(&row.image_link));
    Ok(extractor.extract(&image_path, row.entity_name).await?)
}
