//! Pipeline configuration
//!
//! Plain settings struct consumed by the runner and supervisor, built
//! from the parsed CLI arguments (flags and `QEX_*` environment variables
//! are merged by clap).

use crate::PipelineArgs;
use std::path::PathBuf;
use std::time::Duration;

/// Default rows per checkpoint batch.
pub const DEFAULT_BATCH_SIZE: u64 = 1000;

/// Default cooldown between worker restarts.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(30);

/// Settings for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Dataset CSV file
    pub dataset: PathBuf,

    /// Directory holding the image artifacts
    pub images_dir: PathBuf,

    /// Output ledger CSV file
    pub output: PathBuf,

    /// Checkpoint file
    pub checkpoint: PathBuf,

    /// Rows per checkpoint batch
    pub batch_size: u64,

    /// Text recognizer service base URL
    pub recognizer_url: String,

    /// Span tagger service base URL
    pub tagger_url: String,

    /// Optional per-request service timeout (hardening; off by default)
    pub request_timeout: Option<Duration>,
}

impl From<&PipelineArgs> for PipelineConfig {
    fn from(args: &PipelineArgs) -> Self {
        Self {
            dataset: args.dataset.clone(),
            images_dir: args.images_dir.clone(),
            output: args.output.clone(),
            checkpoint: args.checkpoint.clone(),
            batch_size: args.batch_size,
            recognizer_url: args.recognizer_url.clone(),
            tagger_url: args.tagger_url.clone(),
            request_timeout: args.request_timeout_secs.map(Duration::from_secs),
        }
    }
}
