//! Tokenizer for overlap counting
//!
//! Normalizes arbitrary text into a set of lowercase, stop-word-filtered,
//! stemmed tokens. Token sets are ephemeral: recomputed per scoring call,
//! never cached, so the tokenizer stays trivially thread-safe.

use crate::stem::stem;
use crate::stopwords::is_stop_word;
use std::collections::HashSet;

/// Minimum stem length kept in the token set
const MIN_TOKEN_LEN: usize = 3;

/// Tokenize text into a set of stemmed search terms
///
/// Steps:
/// 1. Lowercase
/// 2. Drop every character except letters, digits, whitespace, and hyphen
/// 3. Split on whitespace runs
/// 4. Discard stop words
/// 5. Stem (single-pass suffix stripping)
/// 6. Discard stems shorter than 3 characters
///
/// # Example
///
/// ```
/// use docquiz_text::tokenizer::tokenize;
///
/// let tokens = tokenize("What is the powerhouse of the cell?");
/// assert!(tokens.contains("powerhouse"));
/// assert!(tokens.contains("cell"));
/// assert!(!tokens.contains("the"));
/// ```
pub fn tokenize(text: &str) -> HashSet<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| !is_stop_word(w))
        .map(stem)
        .filter(|s| s.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}

/// Normalize text for literal substring matching
///
/// Lowercases, strips punctuation, and collapses whitespace runs to single
/// spaces. Used for the "option text appears verbatim in this sentence"
/// bonus, where token sets are too coarse.
///
/// # Example
///
/// ```
/// use docquiz_text::tokenizer::normalize;
///
/// assert_eq!(normalize("The  Mitochondria!"), "the mitochondria");
/// ```
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
