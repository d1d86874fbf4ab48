//! Question and result types for the answering pipeline
//!
//! This module defines the question model and the result type:
//! - QuizOption: one lettered answer option
//! - ParsedQuestion: output of the question parser
//! - SearchMethod: which path produced a result
//! - SmartSearchResult: the sole externally visible output type
//!
//! # Invariant
//!
//! All types here are immutable after construction. The pipeline is purely
//! functional over its inputs; results are built fresh per query and never
//! retained.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// QuizOption
// ============================================================================

/// A single answer option extracted from a multiple-choice question
///
/// Letters are normalized to uppercase `'A'..='E'` and are unique within a
/// [`ParsedQuestion`]. Option text is whitespace-collapsed at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Option letter, one of 'A'..='E'
    pub letter: char,

    /// Option text (whitespace-collapsed, non-empty)
    pub text: String,
}

impl QuizOption {
    /// Create a new option, normalizing the letter to uppercase
    pub fn new(letter: char, text: impl Into<String>) -> Self {
        QuizOption {
            letter: letter.to_ascii_uppercase(),
            text: text.into(),
        }
    }
}

// ============================================================================
// ParsedQuestion
// ============================================================================

/// Output of the question parser
///
/// # Invariant
///
/// `is_quiz` is true iff at least 2 options were parsed. For quiz questions
/// `options` holds 2-5 entries with unique letters sorted A->E.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    /// True iff at least 2 distinct options were parsed
    pub is_quiz: bool,

    /// True iff the question body is negatively phrased (NOT, EXCEPT, ...)
    pub is_negative: bool,

    /// Question body preceding the first option marker, trimmed
    pub question_text: String,

    /// Parsed options, unique letters, sorted ascending by letter
    pub options: Vec<QuizOption>,
}

impl ParsedQuestion {
    /// Create a parsed question; `is_quiz` is derived from the option count
    pub fn new(question_text: impl Into<String>, options: Vec<QuizOption>, is_negative: bool) -> Self {
        ParsedQuestion {
            is_quiz: options.len() >= 2,
            is_negative,
            question_text: question_text.into(),
            options,
        }
    }

    /// Create a non-quiz result for input with fewer than 2 options
    pub fn non_quiz(question_text: impl Into<String>, is_negative: bool) -> Self {
        ParsedQuestion {
            is_quiz: false,
            is_negative,
            question_text: question_text.into(),
            options: vec![],
        }
    }

    /// Look up an option by letter (case-insensitive)
    pub fn option(&self, letter: char) -> Option<&QuizOption> {
        let letter = letter.to_ascii_uppercase();
        self.options.iter().find(|o| o.letter == letter)
    }
}

// ============================================================================
// SearchMethod
// ============================================================================

/// Which path produced a [`SmartSearchResult`]
///
/// The core only ever produces `Quiz` (full pipeline) or `Direct` (non-quiz
/// stub). `Ai` is reserved for callers that escalate to a generative-model
/// fallback; the core never constructs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    /// Full multiple-choice scoring pipeline
    Quiz,
    /// Non-quiz passthrough (stub; no answer extraction)
    Direct,
    /// Reserved for caller-side generative fallback
    Ai,
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMethod::Quiz => write!(f, "quiz"),
            SearchMethod::Direct => write!(f, "direct"),
            SearchMethod::Ai => write!(f, "ai"),
        }
    }
}

// ============================================================================
// SmartSearchResult
// ============================================================================

/// Final answer for one query
///
/// This is the only type the pipeline hands back to callers. Constructed
/// fresh per query, returned, not retained.
///
/// # Invariant
///
/// `confidence` is always within `[0.0, 1.0]`; constructors clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartSearchResult {
    /// Winning option letter as a string, empty when no quiz was detected
    pub answer: String,

    /// Confidence estimate in [0, 1]
    pub confidence: f64,

    /// Best supporting sentence, or a fixed placeholder when none was found
    pub evidence: String,

    /// Human-readable explanation of the decision
    pub explanation: String,

    /// Which path produced this result
    pub method: SearchMethod,
}

impl SmartSearchResult {
    /// Create a quiz-path result, clamping confidence into [0, 1]
    pub fn quiz(
        answer: char,
        confidence: f64,
        evidence: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        SmartSearchResult {
            answer: answer.to_string(),
            confidence: confidence.clamp(0.0, 1.0),
            evidence: evidence.into(),
            explanation: explanation.into(),
            method: SearchMethod::Quiz,
        }
    }

    /// Create the zero-confidence direct stub returned for non-quiz input
    ///
    /// The real direct-answer path lives outside this core (e.g. a
    /// generative-model fallback owned by the caller).
    pub fn direct_stub() -> Self {
        SmartSearchResult {
            answer: String::new(),
            confidence: 0.0,
            evidence: String::new(),
            explanation: "Input is not a multiple-choice question; no direct answer path available."
                .to_string(),
            method: SearchMethod::Direct,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // QuizOption Tests
    // ========================================

    #[test]
    fn test_option_new_uppercases_letter() {
        let opt = QuizOption::new('b', "The Mitochondria");
        assert_eq!(opt.letter, 'B');
        assert_eq!(opt.text, "The Mitochondria");
    }

    // ========================================
    // ParsedQuestion Tests
    // ========================================

    #[test]
    fn test_parsed_question_is_quiz_derived() {
        let two = ParsedQuestion::new(
            "Which?",
            vec![QuizOption::new('A', "x"), QuizOption::new('B', "y")],
            false,
        );
        assert!(two.is_quiz);

        let one = ParsedQuestion::new("Which?", vec![QuizOption::new('A', "x")], false);
        assert!(!one.is_quiz);
    }

    #[test]
    fn test_parsed_question_non_quiz() {
        let q = ParsedQuestion::non_quiz("Tell me about mitochondria", false);
        assert!(!q.is_quiz);
        assert!(q.options.is_empty());
        assert_eq!(q.question_text, "Tell me about mitochondria");
    }

    #[test]
    fn test_parsed_question_option_lookup() {
        let q = ParsedQuestion::new(
            "Which?",
            vec![QuizOption::new('A', "x"), QuizOption::new('B', "y")],
            false,
        );
        assert_eq!(q.option('b').map(|o| o.text.as_str()), Some("y"));
        assert!(q.option('C').is_none());
    }

    // ========================================
    // SearchMethod Tests
    // ========================================

    #[test]
    fn test_search_method_display() {
        assert_eq!(SearchMethod::Quiz.to_string(), "quiz");
        assert_eq!(SearchMethod::Direct.to_string(), "direct");
        assert_eq!(SearchMethod::Ai.to_string(), "ai");
    }

    #[test]
    fn test_search_method_serde_lowercase() {
        let json = serde_json::to_string(&SearchMethod::Quiz).unwrap();
        assert_eq!(json, "\"quiz\"");
        let back: SearchMethod = serde_json::from_str("\"direct\"").unwrap();
        assert_eq!(back, SearchMethod::Direct);
    }

    // ========================================
    // SmartSearchResult Tests
    // ========================================

    #[test]
    fn test_result_quiz_constructor() {
        let r = SmartSearchResult::quiz('B', 0.95, "some sentence", "clearly best");
        assert_eq!(r.answer, "B");
        assert!((r.confidence - 0.95).abs() < f64::EPSILON);
        assert_eq!(r.method, SearchMethod::Quiz);
    }

    #[test]
    fn test_result_confidence_clamped() {
        let high = SmartSearchResult::quiz('A', 1.7, "", "");
        assert!((high.confidence - 1.0).abs() < f64::EPSILON);

        let low = SmartSearchResult::quiz('A', -0.3, "", "");
        assert_eq!(low.confidence, 0.0);
    }

    #[test]
    fn test_result_direct_stub() {
        let r = SmartSearchResult::direct_stub();
        assert!(r.answer.is_empty());
        assert_eq!(r.confidence, 0.0);
        assert_eq!(r.method, SearchMethod::Direct);
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let r = SmartSearchResult::quiz('C', 0.98, "Green is a secondary color.", "contrast");
        let json = serde_json::to_string(&r).unwrap();
        let back: SmartSearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The quiz constructor clamps any finite confidence into [0, 1].
            #[test]
            fn confidence_always_clamped(confidence in -10.0f64..10.0) {
                let r = SmartSearchResult::quiz('A', confidence, "", "");
                prop_assert!((0.0..=1.0).contains(&r.confidence));
            }

            /// is_quiz tracks the option count, whatever the inputs.
            #[test]
            fn is_quiz_tracks_option_count(n in 0usize..6) {
                let options: Vec<QuizOption> = ('A'..='E')
                    .take(n)
                    .map(|letter| QuizOption::new(letter, "text"))
                    .collect();
                let q = ParsedQuestion::new("Q?", options, false);
                prop_assert_eq!(q.is_quiz, n >= 2);
            }
        }
    }
}
