//! QEX CLI Library
//!
//! Command-line interface for the product quantity extraction pipeline.
//!
//! # Overview
//!
//! Processing a dataset is a three-step workflow:
//!
//! - **Image Acquisition**: download the dataset's product images
//!   (`qex fetch`)
//! - **Image Enhancement**: contrast boost and denoise for better
//!   recognition (`qex enhance`)
//! - **Extraction**: run the resumable batch pipeline (`qex run`)
//!
//! `qex run` is a supervisor: it launches a bounded-lifetime `qex worker`
//! process and relaunches it after every checkpoint, so long runs never
//! accumulate in-process state. `qex worker` is the single pipeline pass
//! the supervisor drives; it can also be invoked directly.
//!
//! Progress lives in two durable files: the output ledger (one prediction
//! per completed row, flushed immediately) and the checkpoint (the next
//! row index to process, overwritten every batch).

pub mod checkpoint;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod ledger;
pub mod progress;
pub mod runner;
pub mod supervisor;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use error::{CliError, Result};

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// QEX - Product Quantity Extraction Pipeline
#[derive(Parser, Debug)]
#[command(name = "qex")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the dataset's product images
    Fetch {
        /// Dataset CSV file (columns: index, image_link, entity_name)
        #[arg(short, long)]
        dataset: PathBuf,

        /// Directory to deposit downloaded images in
        #[arg(short, long, default_value = "./images")]
        images_dir: PathBuf,

        /// Maximum concurrent downloads
        #[arg(short, long, default_value = "8")]
        concurrency: usize,
    },

    /// Enhance downloaded images (contrast boost + denoise)
    Enhance {
        /// Directory containing the raw images
        #[arg(short, long, default_value = "./images")]
        input_dir: PathBuf,

        /// Directory to write enhanced images to
        #[arg(short, long, default_value = "./images_enhanced")]
        output_dir: PathBuf,

        /// Contrast adjustment factor
        #[arg(long, default_value = "25.0")]
        contrast: f32,
    },

    /// Run the extraction pipeline under the restart supervisor
    Run {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Cooldown between worker restarts, in seconds
        #[arg(long, default_value = "30")]
        cooldown_secs: u64,
    },

    /// Run a single bounded-lifetime pipeline pass (what `run` spawns)
    Worker {
        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Show checkpoint position and ledger progress
    Status {
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

/// Arguments shared by the pipeline commands
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Dataset CSV file (columns: index, image_link, entity_name)
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Directory holding the (enhanced) image artifacts
    #[arg(short, long, default_value = "./images_enhanced")]
    pub images_dir: PathBuf,

    /// Output ledger CSV file
    #[arg(short, long, default_value = "./predictions.csv")]
    pub output: PathBuf,

    /// Checkpoint file
    #[arg(long, default_value = "./checkpoint.txt")]
    pub checkpoint: PathBuf,

    /// Rows per checkpoint batch
    #[arg(short, long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub batch_size: u64,

    /// Text recognizer service base URL
    #[arg(long, env = "QEX_RECOGNIZER_URL", default_value = "http://localhost:9001")]
    pub recognizer_url: String,

    /// Span tagger service base URL
    #[arg(long, env = "QEX_TAGGER_URL", default_value = "http://localhost:9002")]
    pub tagger_url: String,

    /// Optional per-request timeout for the services, in seconds
    #[arg(long, env = "QEX_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}
