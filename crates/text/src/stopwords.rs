//! Stop-word table
//!
//! Closed set of common English function words, modal/auxiliary verbs, and
//! quiz-meta words ("question", "answer", "following") that carry no
//! evidentiary signal. Filtered out before stemming.
//!
//! Negative-phrasing detection and antonym lookup both run against the raw
//! question text, so dropping words like "not" or "most" here does not affect
//! them.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Stop words discarded by the tokenizer
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Articles, conjunctions, prepositions, pronouns
        "a", "about", "above", "after", "again", "all", "an", "and", "any", "as", "at",
        "because", "before", "below", "between", "both", "but", "by", "down", "during",
        "each", "few", "for", "from", "further", "he", "her", "here", "hers", "him",
        "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "more",
        "most", "my", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
        "other", "our", "out", "over", "own", "same", "she", "so", "some", "such",
        "than", "that", "the", "their", "them", "then", "there", "these", "they",
        "this", "those", "through", "to", "too", "under", "until", "up", "very", "we",
        "what", "when", "where", "which", "while", "who", "whom", "why", "you", "your",
        // Modal and auxiliary verbs
        "am", "are", "be", "been", "being", "can", "could", "did", "do", "does",
        "doing", "had", "has", "have", "having", "may", "might", "must", "shall",
        "should", "was", "were", "will", "would",
        // Quiz-meta words
        "answer", "answers", "choose", "following", "option", "options", "question",
        "select", "statement",
    ]
    .into_iter()
    .collect()
});

/// True when `word` (already lowercased) is in the stop-word table
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
