//! Contrast-antonym table for negative questions
//!
//! When a question asks "which is NOT X", a sentence that pairs an option
//! with an antonym of X ("Green is a secondary color") is definitive
//! evidence that the option is the exception. This module owns the antonym
//! table and extracts the contrast terms a question body activates.
//!
//! The table is static data, iterated in fixed order so term collection is
//! deterministic.

/// Antonym table: question keyword -> contrast terms
///
/// Matched whole-word, case-insensitive, against the raw question body (not
/// the stemmed token set, so stop-word filtering never hides a keyword).
const ANTONYMS: &[(&str, &[&str])] = &[
    ("primary", &["secondary", "tertiary"]),
    ("true", &["false", "untrue", "incorrect"]),
    ("correct", &["incorrect", "wrong", "false"]),
    ("first", &["second", "third", "last"]),
    ("always", &["never", "sometimes", "rarely"]),
    ("all", &["none", "some", "few"]),
    ("major", &["minor"]),
    ("positive", &["negative"]),
    ("increase", &["decrease", "reduce"]),
    ("advantage", &["disadvantage"]),
    ("benefit", &["drawback", "harm"]),
    ("include", &["exclude"]),
    ("maximum", &["minimum"]),
    ("best", &["worst"]),
    ("most", &["least"]),
];

/// Collect the contrast terms activated by a question body
///
/// Scans the body for each table keyword (whole-word, case-insensitive) and
/// returns the union of the matched keywords' antonyms, lowercased, in table
/// order, deduplicated.
pub fn contrast_terms(question_body: &str) -> Vec<String> {
    let words: Vec<String> = question_body
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect();

    let mut terms: Vec<String> = Vec::new();
    for (keyword, antonyms) in ANTONYMS {
        if words.iter().any(|w| w == keyword) {
            for antonym in *antonyms {
                if !terms.iter().any(|t| t == antonym) {
                    terms.push((*antonym).to_string());
                }
            }
        }
    }
    terms
}
