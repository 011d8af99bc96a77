//! Results file output
//!
//! Writes the proof response as pretty-printed JSON to
//! `<output_dir>/results.json`, creating the directory when needed.

use crate::models::ProofResponse;
use poc_common::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name read by the attestation layer
pub const RESULTS_FILE_NAME: &str = "results.json";

/// Write `response` into `output_dir`, returning the file path
pub fn write_results(response: &ProofResponse, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let path = output_dir.join(RESULTS_FILE_NAME);
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| Error::Output(format!("Failed to serialize proof response: {}", e)))?;

    let mut file = File::create(&path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    tracing::info!("Proof results written to {}", path.display());
    Ok(path)
}

/// Read a previously written results file
pub fn read_results(path: &Path) -> Result<ProofResponse> {
    let file = File::open(path)?;
    serde_json::from_reader(file)
        .map_err(|e| Error::InvalidInput(format!("Malformed results file {}: {}", path.display(), e)))
}
