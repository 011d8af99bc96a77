//! Input directory listing
//!
//! Lists the top-level entries of the input directory (files and
//! sub-directories alike) in the order the platform yields them. Nothing is
//! sorted or filtered. Any listing error is fatal: the scorer never works
//! from a partial listing.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Directory listing errors
#[derive(Debug, Error)]
pub enum ScanError {
    /// Specified path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Listing failed part way through
    #[error("Failed to read directory {0}: {1}")]
    ReadFailed(PathBuf, String),
}

impl From<ScanError> for poc_common::Error {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::PathNotFound(path) => {
                poc_common::Error::NotFound(format!("Input directory {}", path.display()))
            }
            ScanError::NotADirectory(path) => poc_common::Error::InvalidInput(format!(
                "Input path is not a directory: {}",
                path.display()
            )),
            ScanError::ReadFailed(path, msg) => poc_common::Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to read directory {}: {}", path.display(), msg),
            )),
        }
    }
}

/// Flat directory scanner
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    pub fn new() -> Self {
        Self
    }

    /// List every top-level entry of `root_path`
    pub fn scan(&self, root_path: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !root_path.exists() {
            return Err(ScanError::PathNotFound(root_path.to_path_buf()));
        }

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory(root_path.to_path_buf()));
        }

        let walker = WalkDir::new(root_path)
            .follow_links(false)
            .min_depth(1)
            .max_depth(1);

        let mut entries = Vec::new();
        for entry in walker {
            let entry =
                entry.map_err(|e| ScanError::ReadFailed(root_path.to_path_buf(), e.to_string()))?;
            entries.push(entry.into_path());
        }

        tracing::debug!(
            "Listed {} entries in {}",
            entries.len(),
            root_path.display()
        );

        Ok(entries)
    }
}
