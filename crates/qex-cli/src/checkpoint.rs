//! Checkpoint store
//!
//! A single plain-text integer: the next row index to process. Absent
//! means "start from the beginning"; non-integer content is fatal at
//! startup with no auto-repair. The file is read once at startup and
//! overwritten (never appended) on each checkpoint.

use crate::error::{CliError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The resume position, defaulting to 0 when no checkpoint exists.
pub fn load(path: &Path) -> Result<u64> {
    if !path.exists() {
        return Ok(0);
    }

    let content = std::fs::read_to_string(path)?;
    let trimmed = content.trim();
    trimmed.parse().map_err(|_| CliError::CorruptCheckpoint {
        path: path.to_path_buf(),
        content: trimmed.to_string(),
    })
}

/// Overwrite the checkpoint with `next_index`, synchronously durable.
pub fn store(path: &Path, next_index: u64) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(next_index.to_string().as_bytes())?;
    file.sync_data()?;
    Ok(())
}
