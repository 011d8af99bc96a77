//! # Proof-of-Contribution Common Library
//!
//! Shared code for the proof crates including:
//! - Error type used across the workspace
//! - Proof configuration model and layered resolution

pub mod config;
pub mod error;

pub use config::{ProofConfig, ValidationPolicy};
pub use error::{Error, Result};
