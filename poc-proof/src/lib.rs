//! poc-proof library interface
//!
//! Proof-of-contribution scoring for a directory of uploaded JSON files.
//! Exposes public APIs for the binary and for integration testing.

pub mod models;
pub mod proof;
pub mod runner;
pub mod services;
pub mod types;
pub mod validators;

pub use crate::models::{ProofResponse, SCORE_THRESHOLD};
pub use crate::proof::Proof;
pub use crate::types::{FileValidator, Verdict};
