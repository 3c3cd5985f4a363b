//! Dataset input
//!
//! The dataset is a read-only CSV whose row ordering is significant:
//! checkpoint resumption is purely position-based over the `index`
//! column. A malformed row (missing column, unknown entity name) is fatal
//! immediately; there is no partial-row tolerance.

use crate::error::Result;
use qex_common::types::EntityType;
use serde::Deserialize;
use std::path::Path;

/// One dataset row
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRow {
    /// Unique, ascending row index
    pub index: u64,

    /// Source link the image was published under; its base file name
    /// locates the local artifact
    pub image_link: String,

    /// Entity attribute to extract for this row
    pub entity_name: EntityType,
}

/// Read the whole dataset, in file order.
pub fn read_rows(path: &Path) -> Result<Vec<DatasetRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// The local file name for an image link (its base name).
pub fn image_file_name(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or(link)
}
