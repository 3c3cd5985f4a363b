//! Output Ledger
//!
//! Append-only CSV of completed predictions (`index,prediction`). The
//! header is written once, when the file is created. Every append is
//! flushed and fsynced before the next row starts: a completed row must
//! survive a crash the instant it completes (durability over throughput).
//!
//! The ledger is never re-read or deduplicated by the pipeline; restart
//! safety rests entirely on the checkpoint staying in sync with it.

use crate::error::Result;
use qex_common::types::ExtractionResult;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Append-only prediction ledger.
pub struct Ledger {
    writer: csv::Writer<File>,
    // Second handle to the same file, kept for fsync after each append.
    sync_handle: File,
}

impl Ledger {
    /// Open (or create) the ledger at `path` in append mode.
    pub fn open(path: &Path) -> Result<Self> {
        let is_new = !path.exists();

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let sync_handle = file.try_clone()?;
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        let mut ledger = Self {
            writer,
            sync_handle,
        };

        if is_new {
            ledger.writer.write_record(["index", "prediction"])?;
            ledger.sync()?;
        }

        Ok(ledger)
    }

    /// Append one result and make it durable before returning.
    pub fn append(&mut self, result: &ExtractionResult) -> Result<()> {
        self.writer.serialize(result)?;
        self.sync()
    }

    fn sync(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.sync_handle.sync_data()?;
        Ok(())
    }
}

/// Number of result rows already in the ledger (0 when absent).
pub fn count_rows(path: &Path) -> Result<u64> {
    if !path.exists() {
        return Ok(0);
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut count = 0;
    for record in reader.records() {
        record?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn result(index: u64, prediction: &str) -> ExtractionResult {
        ExtractionResult {
            index,
            prediction: prediction.to_string(),
        }
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictions.csv");

        {
            let mut ledger = Ledger::open(&path).unwrap();
            ledger.append(&result(0, "5 ounce")).unwrap();
        }
        {
            let mut ledger = Ledger::open(&path).unwrap();
            ledger.append(&result(1, "")).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "index,prediction\n0,5 ounce\n1,\n");
    }

    #[test]
    fn test_reopen_appends_after_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictions.csv");

        {
            let mut ledger = Ledger::open(&path).unwrap();
            ledger.append(&result(0, "3 centimetre")).unwrap();
            ledger.append(&result(1, "3 centimetre")).unwrap();
        }
        // a restarted process re-appends without re-validating
        {
            let mut ledger = Ledger::open(&path).unwrap();
            ledger.append(&result(2, "2.5 cubic foot")).unwrap();
        }

        assert_eq!(count_rows(&path).unwrap(), 3);
    }

    #[test]
    fn test_empty_prediction_is_a_real_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictions.csv");

        let mut ledger = Ledger::open(&path).unwrap();
        ledger.append(&result(7, "")).unwrap();
        drop(ledger);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("7,\n"));
        assert_eq!(count_rows(&path).unwrap(), 1);
    }

    #[test]
    fn test_count_rows_absent_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(count_rows(&dir.path().join("missing.csv")).unwrap(), 0);
    }
}
