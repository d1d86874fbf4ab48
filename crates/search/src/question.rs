//! Multiple-choice question parser
//!
//! Detects whether free-form input contains a multiple-choice question and
//! extracts the question body, the lettered options (A-E), and whether the
//! question is negatively phrased.
//!
//! Option parsing runs two independent marker strategies, plain (`A.` /
//! `A)`) and bracketed (`(A)` / `[A]`), and merges their results with plain
//! results first, first-seen letter winning. The merge order is load-bearing
//! for ambiguous inputs and must not change.

use docquiz_core::{ParsedQuestion, QuizOption};
use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// Marker patterns
// ============================================================================

/// Plain option marker: `A.` or `A)` at string start or after whitespace.
/// The trailing delimiter is deliberately not consumed greedily so that
/// back-to-back markers separated by a single space are all found.
static PLAIN_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)([A-Ea-e])[.)]").expect("plain marker regex is valid"));

/// Bracketed option marker: `(A)` or `[A]` at string start or after whitespace
static BRACKET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)[(\[]([A-Ea-e])[)\]]").expect("bracket marker regex is valid"));

/// Uppercase marker glued to preceding text: `...colors?A)` or `text:B.`
/// The preceding character must not be whitespace (nothing to fix), an
/// uppercase letter (acronyms like `DNA.`), or an opening bracket (that is a
/// bracketed marker, handled by the second rule).
static GLUED_PLAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\sA-Z(\[])([A-E][.)\]])").expect("glued plain regex is valid"));

/// Bracketed marker glued to preceding text: `text(A)` or `text[B]`
static GLUED_BRACKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\sA-Z])([(\[][A-Ea-e][)\]])").expect("glued bracket regex is valid"));

/// Negative-phrasing cues, matched whole-word and case-insensitive against
/// the question body
static NEGATIVE_CUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:NOT|EXCEPT|FALSE|INCORRECT|LEAST\s+LIKELY|UNTRUE|WRONG)\b")
        .expect("negative cue regex is valid")
});

// ============================================================================
// Parsing
// ============================================================================

/// One located option marker, before strategy merging
#[derive(Debug, Clone, Copy)]
struct Marker {
    /// Byte offset of the whole match (including any whitespace prefix)
    start: usize,
    /// Byte offset just past the marker delimiter
    end: usize,
    /// Option letter, original case
    letter: char,
}

/// Detect a multiple-choice question in free-form input
///
/// # Flow
///
/// 1. Normalize: insert a newline before markers glued to preceding text
/// 2. Locate the first option marker; everything before it is the body
/// 3. Run both marker strategies, slice option texts between markers
/// 4. Merge (plain first, first-seen letter wins), sort by letter
/// 5. `is_quiz` iff at least 2 distinct options survived
///
/// Letters are case-insensitive on input and uppercased in the output;
/// option text is whitespace-collapsed, and options left empty after
/// trimming are dropped rather than scored.
pub fn detect_quiz_question(input: &str) -> ParsedQuestion {
    let normalized = normalize_glued_markers(input);

    let plain = find_markers(&PLAIN_MARKER, &normalized);
    let bracket = find_markers(&BRACKET_MARKER, &normalized);

    // 2. Question body runs up to the earliest marker of either strategy.
    let body_end = plain
        .first()
        .map(|m| m.start)
        .into_iter()
        .chain(bracket.first().map(|m| m.start))
        .min()
        .unwrap_or(normalized.len());
    let question_text = normalized[..body_end].trim().to_string();
    let is_negative = NEGATIVE_CUE.is_match(&question_text);

    // 3. Option text for each marker runs to the next marker of either
    // strategy, or end of input.
    let mut boundaries: Vec<usize> = plain.iter().chain(bracket.iter()).map(|m| m.start).collect();
    boundaries.sort_unstable();

    let mut options: Vec<QuizOption> = Vec::new();
    for marker in plain.iter().chain(bracket.iter()) {
        let text_end = boundaries
            .iter()
            .copied()
            .find(|&b| b >= marker.end)
            .unwrap_or(normalized.len());
        let text = collapse_whitespace(&normalized[marker.end..text_end]);
        if text.is_empty() {
            continue;
        }
        let letter = marker.letter.to_ascii_uppercase();
        if options.iter().any(|o| o.letter == letter) {
            continue; // first occurrence wins
        }
        options.push(QuizOption::new(letter, text));
    }
    options.sort_by_key(|o| o.letter);

    ParsedQuestion::new(question_text, options, is_negative)
}

/// Insert a newline before option markers glued to the preceding text
fn normalize_glued_markers(input: &str) -> String {
    let pass1 = GLUED_PLAIN.replace_all(input, "$1\n$2");
    GLUED_BRACKET.replace_all(&pass1, "$1\n$2").into_owned()
}

/// Find all markers for one strategy, in input order
fn find_markers(pattern: &Regex, text: &str) -> Vec<Marker> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let letter_group = caps.get(1)?;
            Some(Marker {
                start: whole.start(),
                end: whole.end(),
                letter: letter_group.as_str().chars().next()?,
            })
        })
        .collect()
}

/// Collapse whitespace runs to single spaces and trim
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Tests
// ============================================================================
