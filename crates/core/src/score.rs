//! Per-option support scores
//!
//! This module defines:
//! - Support: tagged score for one option (weighted number vs contrast match)
//! - OptionScore: the full scoring record handed to the decision engine
//!
//! An earlier rendition of this pipeline overloaded a numeric score with a
//! reserved -1 sentinel meaning "definitive contrast match". The sentinel is
//! replaced here by a tagged variant so score comparisons can never
//! accidentally consume it; decision behavior is unchanged.

use serde::{Deserialize, Serialize};

// ============================================================================
// Support
// ============================================================================

/// Evidentiary support for one answer option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Support {
    /// Accumulated window score; 0.0 means no overlap was found anywhere
    Weighted(f64),

    /// Definitive contrast evidence for a negative question: the option's
    /// text appears before a contrast antonym within a single sentence.
    /// Short-circuits normal score comparison in the decision engine.
    Contrast {
        /// The sentence containing the contrast match
        evidence: String,
    },
}

impl Support {
    /// True for the contrast variant
    pub fn is_contrast(&self) -> bool {
        matches!(self, Support::Contrast { .. })
    }

    /// The weighted value; 0.0 for contrast matches
    ///
    /// The decision engine checks [`Support::is_contrast`] before ordering by
    /// weight, so the contrast value is never compared.
    pub fn weight(&self) -> f64 {
        match self {
            Support::Weighted(w) => *w,
            Support::Contrast { .. } => 0.0,
        }
    }
}

impl Default for Support {
    fn default() -> Self {
        Support::Weighted(0.0)
    }
}

// ============================================================================
// OptionScore
// ============================================================================

/// Scoring record for one answer option
///
/// Produced by the sentence scorer, consumed by the decision engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionScore {
    /// Option letter ('A'..='E')
    pub letter: char,

    /// Option text as parsed
    pub text: String,

    /// Support for this option
    pub support: Support,

    /// Best supporting sentence, empty when none was found
    pub evidence: String,

    /// Human-readable contributions of the best-scoring window
    pub breakdown: Vec<String>,
}

impl OptionScore {
    /// Create a zero score for an option (no evidence found yet)
    pub fn unsupported(letter: char, text: impl Into<String>) -> Self {
        OptionScore {
            letter,
            text: text.into(),
            support: Support::default(),
            evidence: String::new(),
            breakdown: vec![],
        }
    }

    /// Shorthand for the weighted value of this option's support
    pub fn weight(&self) -> f64 {
        self.support.weight()
    }
}

// ============================================================================
// Tests
// ============================================================================
