//! Proof-of-contribution result record
//!
//! Built once at the end of a generation run and never mutated afterward.
//! Serialized to JSON for the attestation layer; `metadata` is the subset
//! written on-chain, `attributes` are public properties of the proof.

use serde::{Deserialize, Serialize};

/// Minimum total score for a proof to be valid
pub const SCORE_THRESHOLD: f64 = 0.2;

/// Weight of quality in the overall score
pub const QUALITY_WEIGHT: f64 = 0.6;

/// Weight of ownership in the overall score
pub const OWNERSHIP_WEIGHT: f64 = 0.4;

/// Public properties describing how the score was reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofAttributes {
    pub total_score: u8,
    pub score_threshold: f64,
    /// Pass-through of the uploader's email (extension policy only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// Chain-written metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofMetadata {
    pub dlp_id: u64,
}

/// Result of one proof generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofResponse {
    dlp_id: u64,
    valid: bool,
    score: f64,
    authenticity: f64,
    ownership: f64,
    quality: f64,
    uniqueness: f64,
    attributes: ProofAttributes,
    metadata: ProofMetadata,
}

impl ProofResponse {
    /// Derive every field from the final total score
    ///
    /// Ownership and quality both mirror `total_score`. Authenticity and
    /// uniqueness are not scored and stay at zero.
    pub fn from_total_score(dlp_id: u64, total_score: u8, user_email: Option<String>) -> Self {
        let ownership = f64::from(total_score);
        let quality = f64::from(total_score);

        Self {
            dlp_id,
            valid: f64::from(total_score) >= SCORE_THRESHOLD,
            score: weighted_score(quality, ownership),
            authenticity: 0.0,
            ownership,
            quality,
            uniqueness: 0.0,
            attributes: ProofAttributes {
                total_score,
                score_threshold: SCORE_THRESHOLD,
                user_email,
            },
            metadata: ProofMetadata { dlp_id },
        }
    }

    pub fn dlp_id(&self) -> u64 {
        self.dlp_id
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn authenticity(&self) -> f64 {
        self.authenticity
    }

    pub fn ownership(&self) -> f64 {
        self.ownership
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    pub fn uniqueness(&self) -> f64 {
        self.uniqueness
    }

    pub fn attributes(&self) -> &ProofAttributes {
        &self.attributes
    }

    pub fn metadata(&self) -> &ProofMetadata {
        &self.metadata
    }
}

/// Overall score: `0.6 * quality + 0.4 * ownership`
pub fn weighted_score(quality: f64, ownership: f64) -> f64 {
    QUALITY_WEIGHT * quality + OWNERSHIP_WEIGHT * ownership
}
