//! Suffix-stripping stemmer
//!
//! A deliberately small, deterministic stemmer: one ordered table of
//! suffix -> replacement rules, most specific first. The first rule whose
//! suffix matches and whose resulting stem keeps at least [`MIN_STEM_LEN`]
//! characters is applied; at most one suffix is stripped per word (the pass
//! is not iterative). Words shorter than [`MIN_STEM_WORD_LEN`] are never
//! stemmed.
//!
//! This trades linguistic accuracy for predictability: "generating" and
//! "generated" both collapse to "generat", which is all overlap counting
//! needs.

/// Words shorter than this are never stemmed
pub const MIN_STEM_WORD_LEN: usize = 4;

/// A rule only applies when the resulting stem keeps at least this many chars
pub const MIN_STEM_LEN: usize = 3;

/// Ordered suffix -> replacement rules, most specific first
///
/// Order matters: "ies" must be tried before "es" before "s", "ational"
/// before "ation", and the "*ness" compounds before bare "ness".
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ization", "ize"),
    ("ational", "ate"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("ation", "ate"),
    ("ments", ""),
    ("ment", ""),
    ("ness", ""),
    ("ical", "ic"),
    ("ions", "ion"),
    ("ies", "y"),
    ("ied", "y"),
    ("ily", "y"),
    ("ing", ""),
    ("est", ""),
    ("ed", ""),
    ("es", ""),
    ("er", ""),
    ("ly", ""),
    ("s", ""),
];

/// Stem a lowercased word by stripping at most one suffix
///
/// # Example
///
/// ```
/// use docquiz_text::stem::stem;
///
/// assert_eq!(stem("generating"), "generat");
/// assert_eq!(stem("colors"), "color");
/// assert_eq!(stem("cell"), "cell");
/// ```
pub fn stem(word: &str) -> String {
    if word.chars().count() < MIN_STEM_WORD_LEN {
        return word.to_string();
    }

    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(base) = word.strip_suffix(suffix) {
            if base.chars().count() >= MIN_STEM_LEN {
                return format!("{base}{replacement}");
            }
            // A shorter rule may still fit; keep scanning.
        }
    }

    word.to_string()
}
