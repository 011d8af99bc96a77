//! Data models for the proof scorer
//!
//! - `input_record` - schema of an uploaded data file
//! - `proof_response` - result record handed to the attestation layer

pub mod input_record;
pub mod proof_response;

pub use input_record::{InputRecord, Preferences, SchemaViolation};
pub use proof_response::{ProofAttributes, ProofMetadata, ProofResponse, SCORE_THRESHOLD};
