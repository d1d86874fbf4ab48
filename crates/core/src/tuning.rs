//! Pipeline tuning constants
//!
//! This module defines the chunking, hotspot, and scoring constants used by
//! the pipeline. Violations of the structural constraints are rejected at
//! solver construction time with `TuningError`.
//!
//! ## Contract
//!
//! The default values are FROZEN: they are the calibration the scoring
//! heuristics and confidence bands were tested against. Custom tunings can be
//! supplied at solver construction time.

use thiserror::Error;

/// Chunking, hotspot, and scoring constants for the answering pipeline
///
/// Weights are dimensionless contributions to an option's window score; the
/// thresholds drive the decision engine's negative-question banding.
#[derive(Debug, Clone)]
pub struct Tuning {
    /// Chunk window length in characters (default: 500)
    pub chunk_size: usize,

    /// Overlap between neighboring chunks in characters (default: 100)
    pub chunk_overlap: usize,

    /// Maximum chunks retained for sentence-level scoring (default: 20)
    pub hotspot_cap: usize,

    /// Minimum sentence length in characters after trimming (default: 10)
    pub min_sentence_len: usize,

    /// Score per overlapping question stem in a window (default: 10)
    pub question_stem_weight: f64,

    /// Score per overlapping option stem in a window (default: 15)
    pub option_stem_weight: f64,

    /// Bonus when the current sentence alone holds both a question stem and
    /// an option stem (default: 50)
    pub cooccurrence_bonus: f64,

    /// Bonus when the current sentence contains the option text as a
    /// normalized exact substring (default: 100)
    pub literal_match_bonus: f64,

    /// Bonus when option-token coverage in the window exceeds
    /// `coverage_threshold` (default: 30)
    pub coverage_bonus: f64,

    /// Additional bonus on top of `coverage_bonus` at full coverage
    /// (default: 50)
    pub full_coverage_bonus: f64,

    /// Coverage fraction above which `coverage_bonus` applies (default: 0.8)
    pub coverage_threshold: f64,

    /// Score above which an option counts as well-supported in the
    /// negative-question heuristic (default: 30)
    pub high_support_floor: f64,

    /// Score below which an option counts as clearly unsupported in the
    /// negative-question heuristic (default: 15)
    pub weak_support_ceiling: f64,

    /// Worst/best score ratio below which a negative-question inversion is
    /// considered clear (default: 0.3)
    pub inversion_ratio: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            chunk_size: 500,
            chunk_overlap: 100,
            hotspot_cap: 20,
            min_sentence_len: 10,
            question_stem_weight: 10.0,
            option_stem_weight: 15.0,
            cooccurrence_bonus: 50.0,
            literal_match_bonus: 100.0,
            coverage_bonus: 30.0,
            full_coverage_bonus: 50.0,
            coverage_threshold: 0.8,
            high_support_floor: 30.0,
            weak_support_ceiling: 15.0,
            inversion_ratio: 0.3,
        }
    }
}

impl Tuning {
    /// Create a tuning with small windows for testing
    ///
    /// Useful for unit tests that need to exercise chunking and hotspot
    /// filtering without multi-kilobyte fixtures.
    pub fn with_small_windows() -> Self {
        Tuning {
            chunk_size: 40,
            chunk_overlap: 10,
            hotspot_cap: 3,
            ..Tuning::default()
        }
    }

    /// Builder: set chunk size
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Builder: set chunk overlap
    pub fn with_chunk_overlap(mut self, overlap: usize) -> Self {
        self.chunk_overlap = overlap;
        self
    }

    /// Builder: set hotspot cap
    pub fn with_hotspot_cap(mut self, cap: usize) -> Self {
        self.hotspot_cap = cap;
        self
    }

    /// Validate structural constraints
    ///
    /// Scoring weights are unconstrained (any calibration is permitted);
    /// only the constraints that would break chunking or hotspot selection
    /// are rejected.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.chunk_size == 0 {
            return Err(TuningError::ZeroChunkSize);
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(TuningError::OverlapTooLarge {
                overlap: self.chunk_overlap,
                chunk_size: self.chunk_size,
            });
        }
        if self.hotspot_cap == 0 {
            return Err(TuningError::ZeroHotspotCap);
        }
        Ok(())
    }
}

/// Tuning validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TuningError {
    /// Chunk size must be positive
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    /// Overlap must leave a positive stride between chunk starts
    #[error("chunk overlap {overlap} must be smaller than chunk size {chunk_size}")]
    OverlapTooLarge {
        /// Configured overlap
        overlap: usize,
        /// Configured chunk size
        chunk_size: usize,
    },

    /// Hotspot cap must be positive
    #[error("hotspot cap must be greater than zero")]
    ZeroHotspotCap,
}
