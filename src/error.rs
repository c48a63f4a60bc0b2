//! Application error types.
//!
//! Defines the `AppError` enum for all recoverable error conditions and a
//! crate-local `Result` alias.
//!
//! Error policy:
//! - `Io`, `InvalidData` → fatal at the CLI boundary (bad input file/JSON)
//! - `Render` → caught and logged at the chart handoff, never fatal
//! - Malformed commit records are not errors at all; they degrade gracefully
//!   (excluded from the timeline aggregation only)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid commit data: {0}")]
    InvalidData(#[from] serde_json::Error),

    #[error("Chart rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
