//! Sliding-window sentence scorer
//!
//! Evaluates each answer option against the retained hotspot text using a
//! three-sentence window (previous, current, next). Window scores accumulate
//! stem-overlap weights plus bonuses for same-sentence co-occurrence, literal
//! option mentions, and high option-token coverage.
//!
//! For negative questions the scorer additionally looks for contrast
//! evidence: the option's literal text followed, within the same sentence, by
//! an antonym of a question keyword. A contrast match is definitive and
//! overrides any weighted score for that option.

use crate::contrast::contrast_terms;
use docquiz_core::{OptionScore, ParsedQuestion, QuizOption, Support, Tuning};
use docquiz_text::sentence::split_sentences;
use docquiz_text::tokenizer::{normalize, tokenize};
use std::collections::HashSet;

// ============================================================================
// SentenceScorer
// ============================================================================

/// Scores answer options against one block of hotspot text
///
/// Ephemeral: built once per query from the combined hotspot text and the
/// parsed question, used to score each option, then dropped. Holds no
/// state beyond precomputed views of its inputs.
pub struct SentenceScorer<'a> {
    tuning: &'a Tuning,
    sentences: Vec<String>,
    sentences_lower: Vec<String>,
    sentences_normalized: Vec<String>,
    question_tokens: HashSet<String>,
    /// Contrast terms activated by the question body; empty for standard
    /// questions, so the contrast check never runs for them
    contrast_terms: Vec<String>,
}

impl<'a> SentenceScorer<'a> {
    /// Build a scorer for one question over the combined hotspot text
    pub fn new(tuning: &'a Tuning, hotspot_text: &str, question: &ParsedQuestion) -> Self {
        let sentences = split_sentences(hotspot_text, tuning.min_sentence_len);
        let sentences_lower = sentences.iter().map(|s| s.to_lowercase()).collect();
        let sentences_normalized = sentences.iter().map(|s| normalize(s)).collect();
        let contrast_terms = if question.is_negative {
            contrast_terms(&question.question_text)
        } else {
            vec![]
        };

        SentenceScorer {
            tuning,
            sentences,
            sentences_lower,
            sentences_normalized,
            question_tokens: tokenize(&question.question_text),
            contrast_terms,
        }
    }

    /// Number of sentences retained for scoring
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Score one option across all three-sentence windows
    pub fn score_option(&self, option: &QuizOption) -> OptionScore {
        let option_tokens = tokenize(&option.text);
        let option_literal = option.text.trim().to_lowercase();
        let option_normalized = normalize(&option.text);

        let mut best_score = 0.0_f64;
        let mut best_sentence = String::new();
        let mut best_breakdown: Vec<String> = Vec::new();
        let mut contrast_evidence: Option<String> = None;

        for idx in 0..self.sentences.len() {
            // Contrast check runs on the current sentence alone; the first
            // match is definitive and is never overwritten.
            if contrast_evidence.is_none() {
                if let Some(evidence) = self.contrast_match(idx, &option_literal) {
                    contrast_evidence = Some(evidence);
                }
            }

            let window = self.window_text(idx);
            let window_tokens = tokenize(&window);
            let question_overlap = count_overlap(&self.question_tokens, &window_tokens);
            let option_overlap = count_overlap(&option_tokens, &window_tokens);

            if question_overlap == 0 && option_overlap == 0 {
                continue;
            }

            let (score, breakdown) =
                self.window_score(idx, question_overlap, option_overlap, &option_tokens, &option_normalized);

            if score > best_score {
                best_score = score;
                best_sentence = self.sentences[idx].clone();
                best_breakdown = breakdown;
            }
        }

        // Contrast evidence overrides any weighted score found in the same pass.
        if let Some(evidence) = contrast_evidence {
            return OptionScore {
                letter: option.letter,
                text: option.text.clone(),
                support: Support::Contrast {
                    evidence: evidence.clone(),
                },
                evidence,
                breakdown: vec!["option text precedes a contrast antonym in one sentence".to_string()],
            };
        }

        OptionScore {
            letter: option.letter,
            text: option.text.clone(),
            support: Support::Weighted(best_score),
            evidence: best_sentence,
            breakdown: best_breakdown,
        }
    }

    // ========================================================================
    // Window internals
    // ========================================================================

    /// Previous + current + next sentence, empty strings at the edges
    fn window_text(&self, idx: usize) -> String {
        let prev = if idx > 0 { self.sentences[idx - 1].as_str() } else { "" };
        let cur = self.sentences[idx].as_str();
        let next = self.sentences.get(idx + 1).map(String::as_str).unwrap_or("");
        format!("{prev} {cur} {next}")
    }

    /// Accumulate the weighted score for one window
    fn window_score(
        &self,
        idx: usize,
        question_overlap: usize,
        option_overlap: usize,
        option_tokens: &HashSet<String>,
        option_normalized: &str,
    ) -> (f64, Vec<String>) {
        let t = self.tuning;
        let mut score = 0.0;
        let mut breakdown = Vec::new();

        if question_overlap > 0 {
            score += question_overlap as f64 * t.question_stem_weight;
            breakdown.push(format!("{question_overlap} question stem(s) in window"));
        }
        if option_overlap > 0 {
            score += option_overlap as f64 * t.option_stem_weight;
            breakdown.push(format!("{option_overlap} option stem(s) in window"));
        }

        // Bonus: the current sentence alone carries both question and option.
        let current_tokens = tokenize(&self.sentences[idx]);
        if count_overlap(&self.question_tokens, &current_tokens) >= 1
            && count_overlap(option_tokens, &current_tokens) >= 1
        {
            score += t.cooccurrence_bonus;
            breakdown.push("question and option co-occur in one sentence".to_string());
        }

        // Bonus: literal option mention in the current sentence.
        if !option_normalized.is_empty() && self.sentences_normalized[idx].contains(option_normalized) {
            score += t.literal_match_bonus;
            breakdown.push("option text appears verbatim".to_string());
        }

        // Bonus: most (or all) of the option's tokens are in the window.
        if !option_tokens.is_empty() {
            let coverage = option_overlap as f64 / option_tokens.len() as f64;
            if coverage > t.coverage_threshold {
                score += t.coverage_bonus;
                breakdown.push("high option coverage".to_string());
                if coverage >= 1.0 {
                    score += t.full_coverage_bonus;
                    breakdown.push("full option coverage".to_string());
                }
            }
        }

        (score, breakdown)
    }

    /// Contrast evidence in the current sentence: option literal first, any
    /// activated antonym after it
    fn contrast_match(&self, idx: usize, option_literal: &str) -> Option<String> {
        if self.contrast_terms.is_empty() || option_literal.is_empty() {
            return None;
        }
        let sentence = &self.sentences_lower[idx];
        let pos = sentence.find(option_literal)?;
        let after = &sentence[pos + option_literal.len()..];
        if self.contrast_terms.iter().any(|term| after.contains(term.as_str())) {
            Some(self.sentences[idx].clone())
        } else {
            None
        }
    }
}

/// Size of the intersection of two token sets
fn count_overlap(a: &HashSet<String>, b: &HashSet<String>) -> usize {
    a.intersection(b).count()
}

// ============================================================================
// Tests
// ============================================================================
