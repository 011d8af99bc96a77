//! Core types and the validator trait
//!
//! A validator looks at one directory entry and returns a [`Verdict`]. The
//! scorer folds verdicts into a single running score where each verdict
//! replaces the previous value (`Skip` leaves it alone).

use crate::models::SchemaViolation;
use std::path::Path;
use thiserror::Error;

/// Score written for an accepted entry
pub const SCORE_ACCEPT: u8 = 1;

/// Score written for a rejected entry
pub const SCORE_REJECT: u8 = 0;

/// Why an entry was rejected
#[derive(Debug, Error)]
pub enum RejectReason {
    /// Entry could not be read (includes directories)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Content is not valid UTF-8 JSON
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed document does not match the record schema
    #[error(transparent)]
    Schema(#[from] SchemaViolation),
}

/// Outcome of validating one entry
#[derive(Debug)]
pub enum Verdict {
    /// Entry passed; running score becomes 1
    Accept,
    /// Entry failed; running score becomes 0
    Reject(RejectReason),
    /// Entry not considered; running score unchanged
    Skip,
}

impl Verdict {
    /// Apply this verdict to the running score
    pub fn apply(&self, current: u8) -> u8 {
        match self {
            Verdict::Accept => SCORE_ACCEPT,
            Verdict::Reject(_) => SCORE_REJECT,
            Verdict::Skip => current,
        }
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// Per-entry validation strategy
///
/// # Example
/// ```rust,ignore
/// use poc_proof::types::{FileValidator, Verdict};
///
/// struct AcceptAll;
///
/// impl FileValidator for AcceptAll {
///     fn name(&self) -> &'static str { "AcceptAll" }
///     fn validate(&self, _path: &Path) -> Verdict { Verdict::Accept }
/// }
/// ```
pub trait FileValidator: Send + Sync {
    /// Validator name for log output
    fn name(&self) -> &'static str;

    /// Judge one directory entry
    ///
    /// Never fails: unreadable or malformed entries become `Verdict::Reject`.
    fn validate(&self, path: &Path) -> Verdict;
}
