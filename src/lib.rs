//! DocQuiz - heuristic quiz answering over an in-memory text corpus
//!
//! DocQuiz answers multiple-choice questions against already-extracted
//! document text without any model call: it parses the question and its
//! lettered options, ranks document chunks by keyword density, scores each
//! option with a sliding three-sentence window, and decides an answer with a
//! calibrated confidence. Negatively phrased questions ("which is NOT ...")
//! invert the decision and can be settled outright by contrast-antonym
//! evidence.
//!
//! # Quick Start
//!
//! ```
//! use docquiz::search;
//!
//! let result = search(
//!     "What is known as the powerhouse of the cell? \
//!      A) The Nucleus B) The Mitochondria C) The Ribosome D) The Golgi Apparatus",
//!     "The mitochondria is the powerhouse of the cell, generating most of the \
//!      cell's supply of ATP.",
//! );
//!
//! assert_eq!(result.answer, "B");
//! assert!(result.confidence >= 0.85);
//! ```
//!
//! # Architecture
//!
//! The pipeline is purely functional over its inputs: parse -> chunk ->
//! select hotspots -> score options -> decide, all synchronous and CPU-only.
//! Non-quiz input degrades to a zero-confidence `direct` result for the
//! caller's own fallback logic; the pipeline itself never errors.

// Re-export the public API from the pipeline crates
pub use docquiz_core::{
    Error, OptionScore, ParsedQuestion, QuizOption, Result, SearchMethod, SmartSearchResult,
    Support, Tuning, TuningError,
};
pub use docquiz_search::{detect_quiz_question, search, solve_quiz, QuizSolver};
pub use docquiz_text::{chunk_text, tokenize, Chunk};
