//! Error type shared by the proof crates
//!
//! Only run-level failures live here. Per-file validation problems never
//! become an `Error`; the scorer records them as rejections and moves on.

use thiserror::Error;

/// Result type for proof operations
pub type Result<T> = std::result::Result<T, Error>;

/// Run-level failures surfaced to the caller
#[derive(Error, Debug)]
pub enum Error {
    /// File system error while listing input or writing results
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration missing, malformed, or inconsistent with the chosen policy
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input directory missing or holding no entries
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input path unusable (e.g. a file where a directory was expected)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Result record could not be serialized or written
    #[error("Output error: {0}")]
    Output(String),
}
