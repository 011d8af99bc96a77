//! Proof-of-contribution scorer
//!
//! Scans the input directory, judges each entry with the configured
//! validator, and folds the verdicts into a single `total_score`.
//!
//! # Scoring
//! The running score starts at 0 and every verdict overwrites it
//! (`Accept` → 1, `Reject` → 0, `Skip` → unchanged). The final score is the
//! verdict of the last entry that was not skipped, in listing order. It is
//! not an AND/OR over the directory.
//!
//! # Example
//! ```rust,ignore
//! use poc_common::{ProofConfig, ValidationPolicy};
//! use poc_proof::Proof;
//!
//! let config = ProofConfig::new(1234, "/input", "/output", None, ValidationPolicy::Content)?;
//! let response = Proof::new(config).generate()?;
//! println!("valid: {}, score: {}", response.valid(), response.score());
//! ```

use crate::models::ProofResponse;
use crate::services::DirectoryScanner;
use crate::types::{FileValidator, Verdict, SCORE_REJECT};
use crate::validators;
use poc_common::{ProofConfig, Result, ValidationPolicy};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// One proof generation run over a configured input directory
pub struct Proof {
    config: ProofConfig,
    validator: Box<dyn FileValidator>,
    scanner: DirectoryScanner,
}

impl Proof {
    /// Proof using the validator selected by the config's policy
    pub fn new(config: ProofConfig) -> Self {
        let validator = validators::for_policy(config.policy());
        Self {
            config,
            validator,
            scanner: DirectoryScanner::new(),
        }
    }

    /// Proof using a caller-supplied validator
    pub fn with_validator(config: ProofConfig, validator: Box<dyn FileValidator>) -> Self {
        Self {
            config,
            validator,
            scanner: DirectoryScanner::new(),
        }
    }

    pub fn config(&self) -> &ProofConfig {
        &self.config
    }

    /// Run the scan and build the result record
    ///
    /// # Errors
    /// Fails only when the input directory cannot be listed. Per-entry
    /// problems are logged and count as a rejection.
    pub fn generate(&self) -> Result<ProofResponse> {
        let entries = self.scanner.scan(self.config.input_dir())?;
        Ok(self.generate_from(&entries))
    }

    /// Build the result record from an existing listing of the input directory
    pub fn generate_from(&self, entries: &[PathBuf]) -> ProofResponse {
        info!(
            validator = self.validator.name(),
            input_dir = %self.config.input_dir().display(),
            entries = entries.len(),
            "Starting proof generation"
        );

        let total_score = score_entries(self.validator.as_ref(), entries);

        // The email is a pass-through attribute of the extension policy only
        let user_email = match self.config.policy() {
            ValidationPolicy::Extension => self.config.user_email().map(str::to_string),
            ValidationPolicy::Content => None,
        };

        let response =
            ProofResponse::from_total_score(self.config.dlp_id(), total_score, user_email);

        info!(
            total_score,
            score = response.score(),
            valid = response.valid(),
            "Proof generation complete"
        );

        response
    }
}

/// Fold verdicts over entries in order; last written verdict wins
pub fn score_entries(validator: &dyn FileValidator, entries: &[PathBuf]) -> u8 {
    entries.iter().fold(SCORE_REJECT, |current, path| {
        let verdict = validator.validate(path);
        log_verdict(path, &verdict);
        verdict.apply(current)
    })
}

fn log_verdict(path: &Path, verdict: &Verdict) {
    match verdict {
        Verdict::Accept => info!("Accepted {}", path.display()),
        Verdict::Reject(reason) => error!("Error processing file {}: {}", path.display(), reason),
        Verdict::Skip => debug!("Skipped {}", path.display()),
    }
}
