//! Extension validator
//!
//! Accepts any entry whose name ends in `.json` (case-insensitive) without
//! opening it. Other entries are skipped and leave the running score as is.

use crate::types::{FileValidator, Verdict};
use std::path::Path;

const ACCEPTED_EXTENSION: &str = "json";

/// Name-only validator
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtensionValidator;

impl ExtensionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check extension
    fn has_json_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(ACCEPTED_EXTENSION))
            .unwrap_or(false)
    }
}

impl FileValidator for ExtensionValidator {
    fn name(&self) -> &'static str {
        "ExtensionValidator"
    }

    fn validate(&self, path: &Path) -> Verdict {
        if self.has_json_extension(path) {
            Verdict::Accept
        } else {
            Verdict::Skip
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_extension_detection() {
        let validator = ExtensionValidator::new();
        assert!(validator.has_json_extension(Path::new("/in/data.json")));
        assert!(validator.has_json_extension(Path::new("/in/DATA.JSON")));
        assert!(validator.has_json_extension(Path::new("/in/data.Json")));
        assert!(validator.has_json_extension(Path::new("/in/archive.tar.json")));

        assert!(!validator.has_json_extension(Path::new("/in/data.jsonl")));
        assert!(!validator.has_json_extension(Path::new("/in/data.txt")));
        assert!(!validator.has_json_extension(Path::new("/in/json")));
        assert!(!validator.has_json_extension(Path::new("/in/.json")));
    }

    #[test]
    fn test_non_json_is_skipped_not_rejected() {
        let verdict = ExtensionValidator::new().validate(Path::new("notes.txt"));
        assert!(matches!(verdict, Verdict::Skip));
    }

    #[test]
    fn test_content_is_never_read() {
        // Path does not exist; acceptance depends on the name alone
        let verdict = ExtensionValidator::new().validate(Path::new("/nonexistent/upload.json"));
        assert!(verdict.is_accept());
    }
}
