//! Error types for DocQuiz
//!
//! The answering pipeline itself never fails: unparseable input degrades to a
//! non-quiz result and missing evidence degrades to a low-confidence guess.
//! The only fallible surface is configuration, wrapped here so callers deal
//! with a single error type. We use `thiserror` for automatic `Display` and
//! `Error` trait implementations.

use crate::tuning::TuningError;
use thiserror::Error;

/// Result type alias for DocQuiz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for DocQuiz
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid pipeline tuning supplied at solver construction
    #[error("invalid tuning: {0}")]
    InvalidTuning(#[from] TuningError),
}
