//! Error types for QEX

use thiserror::Error;

/// Result type alias for QEX operations
pub type Result<T> = std::result::Result<T, QexError>;

/// Main error type for QEX
///
/// Pipeline and CLI failures carry their own error enums; this one holds
/// only the conditions the shared vocabulary itself can raise.
#[derive(Error, Debug)]
pub enum QexError {
    /// An entity name outside the fixed vocabulary
    #[error("Unknown entity: '{0}'. Valid names: width, depth, height, item_weight, maximum_weight_recommendation, voltage, wattage, item_volume.")]
    UnknownEntity(String),
}
