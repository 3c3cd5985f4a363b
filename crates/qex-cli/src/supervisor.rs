//! Worker supervisor
//!
//! The runner bounds a worker's lifetime at one checkpoint batch to keep
//! long-lived recognizer/tagger state from accumulating. The supervisor
//! makes that loop: launch the worker subcommand of this same binary,
//! wait for it to exit, and
//!
//! - exit code 0: the dataset is complete, stop;
//! - [`RESTART_EXIT_CODE`]: a checkpoint was written, relaunch after the
//!   cooldown with identical arguments;
//! - anything else: an unrecoverable error, stop without retry. The next
//!   invocation resumes from the last checkpoint.
//!
//! The worker holds the ledger and checkpoint exclusively because the
//! supervisor never overlaps worker lifetimes: the old process has fully
//! exited before the new one starts.

use crate::error::{CliError, Result};
use std::time::Duration;
use tokio::process::Command;
use tracing::{info, warn};

/// Exit code a worker uses to signal "checkpoint reached, relaunch me"
/// (EX_TEMPFAIL from sysexits).
pub const RESTART_EXIT_CODE: i32 = 75;

/// Supervise repeated worker passes until the dataset is complete.
pub async fn supervise(worker_args: &[String], cooldown: Duration) -> Result<()> {
    let exe = std::env::current_exe()?;

    loop {
        info!(worker = %exe.display(), "Launching worker");
        let status = Command::new(&exe).args(worker_args).status().await?;

        match status.code() {
            Some(0) => {
                info!("Worker completed the dataset");
                return Ok(());
            }
            Some(RESTART_EXIT_CODE) => {
                info!(
                    cooldown_secs = cooldown.as_secs(),
                    "Checkpoint reached; relaunching worker after cooldown"
                );
                tokio::time::sleep(cooldown).await;
            }
            Some(code) => {
                warn!(code, "Worker exited with an error");
                return Err(CliError::worker(format!("worker exited with code {code}")));
            }
            None => {
                warn!("Worker terminated by signal");
                return Err(CliError::worker("worker terminated by signal"));
            }
        }
    }
}
