//! QEX Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the QEX workspace.
//!
//! # Overview
//!
//! This crate provides functionality used across all QEX workspace members:
//!
//! - **Error Handling**: the shared [`QexError`] type and [`Result`] alias
//! - **Logging**: centralized `tracing` initialization
//! - **Types**: the entity vocabulary and prediction record shared by the
//!   extraction library and the batch runner
//!
//! # Example
//!
//! ```no_run
//! use qex_common::types::EntityType;
//!
//! let entity: EntityType = "item_weight".parse()?;
//! assert_eq!(entity.to_string(), "item_weight");
//! # Ok::<(), qex_common::QexError>(())
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{QexError, Result};
