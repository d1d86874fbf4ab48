//! Leaf text analysis for DocQuiz
//!
//! This crate provides the stateless text utilities every later pipeline
//! stage builds on:
//! - Tokenizer: stemmed, stop-word-filtered token sets
//! - Stemmer: single-pass suffix stripping over a fixed rule table
//! - Sentence splitter
//! - Chunker: fixed-size overlapping character windows
//!
//! All tables (stop words, suffix rules) are static data, not code branches.
//! Nothing here holds state: same input always yields the same output.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunker;
pub mod sentence;
pub mod stem;
pub mod stopwords;
pub mod tokenizer;

pub use chunker::{chunk_text, Chunk};
pub use sentence::split_sentences;
pub use stem::stem;
pub use stopwords::is_stop_word;
pub use tokenizer::{normalize, tokenize};
