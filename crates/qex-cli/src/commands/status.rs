//! `qex status` command implementation

use crate::checkpoint;
use crate::config::PipelineConfig;
use crate::dataset;
use crate::error::Result;
use crate::ledger;

/// Report pipeline progress without touching any state
pub fn run(config: &PipelineConfig) -> Result<()> {
    let total = dataset::read_rows(&config.dataset)?.len() as u64;
    let resume_from = checkpoint::load(&config.checkpoint)?;
    let ledger_rows = if config.output.exists() {
        ledger::count_rows(&config.output)?
    } else {
        0
    };

    println!("Dataset:      {} ({} rows)", config.dataset.display(), total);
    println!("Checkpoint:   {} (resume from row {})", config.checkpoint.display(), resume_from);
    println!("Predictions:  {} ({} rows)", config.output.display(), ledger_rows);

    if resume_from >= total {
        println!("Status:       complete");
    } else {
        println!("Status:       {} of {} rows remaining", total - resume_from, total);
    }

    Ok(())
}
