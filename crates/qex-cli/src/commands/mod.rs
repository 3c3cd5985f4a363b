//! CLI command implementations

pub mod enhance;
pub mod fetch;
pub mod run;
pub mod status;
pub mod worker;
