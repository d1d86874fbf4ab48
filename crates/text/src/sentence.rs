//! Sentence splitting for window scoring
//!
//! Splits on `.`, `!`, or `?` followed by whitespace and drops fragments
//! shorter than the configured minimum after trimming. Abbreviation handling
//! is intentionally absent: the scorer only needs stable, roughly
//! sentence-sized units for its sliding window.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary regex is valid"));

/// Split text into sentences, dropping fragments under `min_len` chars
///
/// # Example
///
/// ```
/// use docquiz_text::sentence::split_sentences;
///
/// let sentences = split_sentences("First sentence here. Second one follows! Ok.", 10);
/// assert_eq!(sentences, vec!["First sentence here", "Second one follows"]);
/// ```
pub fn split_sentences(text: &str, min_len: usize) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() >= min_len)
        .map(String::from)
        .collect()
}
