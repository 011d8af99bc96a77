//! Content validator
//!
//! Reads each entry, parses it as JSON and checks it against the
//! [`InputRecord`] schema. Any read, parse or schema failure is a rejection.

use crate::models::InputRecord;
use crate::types::{FileValidator, RejectReason, Verdict};
use std::path::Path;

/// Schema-checking validator (default policy)
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentValidator;

impl ContentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Parse and schema-check one file
    ///
    /// The file is read fully into memory and closed before parsing, so the
    /// handle is released on every path.
    pub fn check_file(&self, path: &Path) -> Result<InputRecord, RejectReason> {
        let bytes = std::fs::read(path)?;
        let value: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(InputRecord::from_value(&value)?)
    }
}

impl FileValidator for ContentValidator {
    fn name(&self) -> &'static str {
        "ContentValidator"
    }

    fn validate(&self, path: &Path) -> Verdict {
        match self.check_file(path) {
            Ok(_) => Verdict::Accept,
            Err(reason) => Verdict::Reject(reason),
        }
    }
}
