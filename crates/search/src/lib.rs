//! Quiz-answering search pipeline for DocQuiz
//!
//! This crate provides:
//! - Question parser: multiple-choice detection and option extraction
//! - Hotspot selector: keyword-density chunk ranking
//! - Sentence scorer: sliding-window evidence scoring per option
//! - Contrast tables: antonym evidence for negative questions
//! - Decision engine: answer + confidence banding
//! - QuizSolver: the stateless orchestrator tying the stages together
//!
//! Control flow is strictly top-down and synchronous:
//! parse -> chunk -> select hotspots -> score options -> decide.
//! No stage calls back into an earlier one, and no state survives a call.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contrast;
pub mod decision;
pub mod hotspot;
pub mod question;
pub mod scorer;
pub mod solver;

pub use hotspot::find_hotspots;
pub use question::detect_quiz_question;
pub use scorer::SentenceScorer;
pub use solver::{search, solve_quiz, QuizSolver};
