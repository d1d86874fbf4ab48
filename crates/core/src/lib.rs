//! Core types for the DocQuiz answering pipeline
//!
//! This crate defines the foundational types shared by every stage:
//! - ParsedQuestion / QuizOption: the question model produced by the parser
//! - Support / OptionScore: per-option evidence scores
//! - SmartSearchResult / SearchMethod: the sole externally visible output
//! - Tuning: pipeline constants (chunking, hotspot cap, scoring weights)
//! - Error types (thiserror-based)
//!
//! Everything here is plain data: no I/O, no interior mutability, no caches.
//! Values are constructed once per query and never mutated afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod score;
pub mod tuning;
pub mod types;

pub use error::{Error, Result};
pub use score::{OptionScore, Support};
pub use tuning::{Tuning, TuningError};
pub use types::{ParsedQuestion, QuizOption, SearchMethod, SmartSearchResult};
