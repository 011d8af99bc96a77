//! Fixture helpers for proof integration tests

#![allow(dead_code)]

use poc_common::{ProofConfig, ValidationPolicy};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A record matching the schema
pub const VALID_RECORD: &str = r#"{
    "address": "0x71C7656EC7ab88b098defB751B7401B5f6d8976F",
    "unixtime": 1718000000,
    "preferences": {
        "categories": ["music", "travel"],
        "likes": { "music": 12, "travel": 3 }
    }
}"#;

/// Malformed inputs, one per failure class
pub const MISSING_KEY_RECORD: &str = r#"{
    "address": "0xabc",
    "preferences": { "categories": [], "likes": {} }
}"#;
pub const MISSING_PREFERENCE_KEY_RECORD: &str = r#"{
    "address": "0xabc",
    "unixtime": 1718000000,
    "preferences": { "categories": [] }
}"#;
pub const WRONG_TYPE_RECORD: &str = r#"{
    "address": "0xabc",
    "unixtime": "yesterday",
    "preferences": { "categories": [], "likes": {} }
}"#;
pub const NOT_JSON: &str = "address,unixtime\n0xabc,1718000000\n";

pub const TEST_DLP_ID: u64 = 1234;

/// Temporary input/output layout
pub struct Fixture {
    pub temp_dir: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input_dir = temp_dir.path().join("input");
        let output_dir = temp_dir.path().join("output");
        fs::create_dir(&input_dir).expect("Failed to create input dir");

        Self {
            temp_dir,
            input_dir,
            output_dir,
        }
    }

    /// Write a file into the input directory
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.input_dir.join(name);
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    pub fn content_config(&self) -> ProofConfig {
        ProofConfig::new(
            TEST_DLP_ID,
            &self.input_dir,
            &self.output_dir,
            None,
            ValidationPolicy::Content,
        )
        .expect("valid config")
    }

    pub fn extension_config(&self) -> ProofConfig {
        ProofConfig::new(
            TEST_DLP_ID,
            &self.input_dir,
            &self.output_dir,
            Some("uploader@example.com".to_string()),
            ValidationPolicy::Extension,
        )
        .expect("valid config")
    }
}

/// File name of a path, for building expected orderings
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .expect("entry has a file name")
        .to_string_lossy()
        .into_owned()
}
