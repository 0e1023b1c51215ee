//! Error types for the fallible generator surfaces
//!
//! The core transition never fails. Only the opt-in strict constructors,
//! configuration loading and checkpoint restore return these.

use crate::rng::Width;
use thiserror::Error;

/// Errors raised by strict construction, config and checkpoints
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RngError {
    #[error("Seed must be non-zero (a zero state produces zeroes forever)")]
    ZeroSeed,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Width mismatch: expected {expected}, found {actual}")]
    WidthMismatch { expected: Width, actual: Width },

    #[error("Snapshot checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}
