//! End-to-end proof run: input checks, scoring, results output

use crate::models::ProofResponse;
use crate::proof::Proof;
use crate::services::{write_results, DirectoryScanner};
use poc_common::{Error, ProofConfig, Result};
use std::path::PathBuf;
use tracing::{error, info};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub response: ProofResponse,
    pub results_path: PathBuf,
}

/// Score the input directory and write `results.json`
///
/// # Errors
/// - Input directory missing, not a directory, or empty
/// - Output directory or results file cannot be written
pub fn run(config: &ProofConfig) -> Result<RunOutcome> {
    let input_dir = config.input_dir();

    let entries = DirectoryScanner::new().scan(input_dir)?;
    if entries.is_empty() {
        error!("No input files found in {}", input_dir.display());
        return Err(Error::NotFound(format!(
            "No input files found in {}",
            input_dir.display()
        )));
    }
    info!("Found {} input entries in {}", entries.len(), input_dir.display());

    let response = Proof::new(config.clone()).generate_from(&entries);
    let results_path = write_results(&response, config.output_dir())?;

    Ok(RunOutcome {
        response,
        results_path,
    })
}
