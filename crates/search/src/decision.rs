//! Decision engine
//!
//! Combines per-option scores into a single answer letter, a confidence
//! value, and a human-readable explanation. Negative questions invert the
//! selection: the least supported option is the likely exception, unless a
//! contrast match already identified it outright.
//!
//! The confidence bands are calibration from live testing; they are fixed
//! constants here, not tuning knobs.

use docquiz_core::{OptionScore, SmartSearchResult, Support, Tuning};

/// Placeholder evidence when the winning option had no supporting sentence
const NO_EVIDENCE: &str = "No direct textual evidence found.";

// Confidence bands for negative questions.
const CONTRAST_CONFIDENCE: f64 = 0.98;
const STRONG_INVERSION_CONFIDENCE: f64 = 0.95;
const CLEAR_INVERSION_CONFIDENCE: f64 = 0.75;
const WEAK_INVERSION_CONFIDENCE: f64 = 0.6;

// Confidence bands for standard questions, keyed on winner/runner-up ratio.
const CLEAR_WINNER_CONFIDENCE: f64 = 0.95;
const SOLID_WINNER_CONFIDENCE: f64 = 0.85;
const NARROW_WINNER_CONFIDENCE: f64 = 0.70;
const MARGINAL_WINNER_CONFIDENCE: f64 = 0.55;
const NO_EVIDENCE_CONFIDENCE: f64 = 0.5;

const CLEAR_WINNER_RATIO: f64 = 2.0;
const SOLID_WINNER_RATIO: f64 = 1.5;
const NARROW_WINNER_RATIO: f64 = 1.1;

/// Decide the final answer from all option scores
///
/// Standard questions pick the best supported option; negative questions
/// pick the contrast match if one exists, otherwise the least supported
/// option. Every reachable path yields a confidence in `[0, 1]` and a
/// non-empty explanation; an empty score list (unreachable through the
/// solver, which requires a detected quiz) degrades to the direct stub.
pub fn decide(scores: &[OptionScore], is_negative: bool, tuning: &Tuning) -> SmartSearchResult {
    if scores.is_empty() {
        return SmartSearchResult::direct_stub();
    }

    if is_negative {
        decide_negative(scores, tuning)
    } else {
        decide_standard(scores)
    }
}

// ============================================================================
// Negative questions
// ============================================================================

fn decide_negative(scores: &[OptionScore], tuning: &Tuning) -> SmartSearchResult {
    // A contrast match is definitive: the text explicitly pairs this option
    // with an antonym of the question's keyword.
    if let Some(contrast) = scores.iter().find(|s| s.support.is_contrast()) {
        if let Support::Contrast { evidence } = &contrast.support {
            return SmartSearchResult::quiz(
                contrast.letter,
                CONTRAST_CONFIDENCE,
                evidence.clone(),
                format!(
                    "The text directly contrasts option {} with the question's premise: \"{}\"",
                    contrast.letter, evidence
                ),
            );
        }
    }

    let ranked = ranked_descending(scores);
    let best = ranked[0];
    let worst = ranked[ranked.len() - 1];
    let high_count = ranked
        .iter()
        .filter(|s| s.weight() > tuning.high_support_floor)
        .count();

    let (confidence, explanation) = if high_count >= 2 && worst.weight() < tuning.weak_support_ceiling {
        (
            STRONG_INVERSION_CONFIDENCE,
            format!(
                "Several options are well supported by the text while option {} has almost none, \
                 making it the likely exception.",
                worst.letter
            ),
        )
    } else if worst.weight() < best.weight() * tuning.inversion_ratio {
        (
            CLEAR_INVERSION_CONFIDENCE,
            format!(
                "Option {} has clearly less textual support than the best-supported option.",
                worst.letter
            ),
        )
    } else {
        (
            WEAK_INVERSION_CONFIDENCE,
            format!(
                "Negative question: picked the least supported option {}, but the support gap \
                 between options is small.",
                worst.letter
            ),
        )
    };

    SmartSearchResult::quiz(worst.letter, confidence, evidence_or_placeholder(worst), explanation)
}

// ============================================================================
// Standard questions
// ============================================================================

fn decide_standard(scores: &[OptionScore]) -> SmartSearchResult {
    let ranked = ranked_descending(scores);
    let winner = ranked[0];
    let second = ranked.get(1).copied();

    if winner.weight() <= 0.0 {
        return SmartSearchResult::quiz(
            winner.letter,
            NO_EVIDENCE_CONFIDENCE,
            evidence_or_placeholder(winner),
            format!(
                "No strong evidence found for any option; option {} is the best available guess.",
                winner.letter
            ),
        );
    }

    // Runner-up with zero support gives an infinite ratio, which lands in
    // the clear-winner band, same as having no runner-up at all.
    let ratio = match second {
        Some(second) => winner.weight() / second.weight(),
        None => f64::INFINITY,
    };

    let (confidence, explanation) = if ratio > CLEAR_WINNER_RATIO {
        (
            CLEAR_WINNER_CONFIDENCE,
            format!("Option {} is clearly the best supported by the text.", winner.letter),
        )
    } else if ratio > SOLID_WINNER_RATIO {
        (
            SOLID_WINNER_CONFIDENCE,
            format!("Option {} is well supported by the text.", winner.letter),
        )
    } else if ratio > NARROW_WINNER_RATIO {
        (
            NARROW_WINNER_CONFIDENCE,
            format!(
                "Option {} is somewhat better supported than the alternatives.",
                winner.letter
            ),
        )
    } else {
        (
            MARGINAL_WINNER_CONFIDENCE,
            format!(
                "Option {} is marginally ahead of the alternatives; evidence is weak.",
                winner.letter
            ),
        )
    };

    SmartSearchResult::quiz(winner.letter, confidence, evidence_or_placeholder(winner), explanation)
}

// ============================================================================
// Helpers
// ============================================================================

/// Stable descending sort by weighted score: ties keep option (letter) order
fn ranked_descending(scores: &[OptionScore]) -> Vec<&OptionScore> {
    let mut ranked: Vec<&OptionScore> = scores.iter().collect();
    ranked.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
    ranked
}

fn evidence_or_placeholder(score: &OptionScore) -> String {
    if score.evidence.is_empty() {
        NO_EVIDENCE.to_string()
    } else {
        score.evidence.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use docquiz_core::SearchMethod;

    fn weighted(letter: char, weight: f64) -> OptionScore {
        OptionScore {
            letter,
            text: format!("option {letter}"),
            support: Support::Weighted(weight),
            evidence: if weight > 0.0 {
                format!("sentence supporting {letter}")
            } else {
                String::new()
            },
            breakdown: vec![],
        }
    }

    fn contrast(letter: char, evidence: &str) -> OptionScore {
        OptionScore {
            letter,
            text: format!("option {letter}"),
            support: Support::Contrast {
                evidence: evidence.to_string(),
            },
            evidence: evidence.to_string(),
            breakdown: vec![],
        }
    }

    // ========================================
    // Standard questions
    // ========================================

    #[test]
    fn test_clear_winner() {
        let scores = vec![weighted('A', 20.0), weighted('B', 265.0), weighted('C', 20.0)];
        let result = decide(&scores, false, &Tuning::default());

        assert_eq!(result.answer, "B");
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.method, SearchMethod::Quiz);
        assert_eq!(result.evidence, "sentence supporting B");
    }

    #[test]
    fn test_solid_winner_band() {
        // Ratio 1.8: above 1.5, not above 2.
        let scores = vec![weighted('A', 90.0), weighted('B', 50.0)];
        let result = decide(&scores, false, &Tuning::default());
        assert_eq!(result.answer, "A");
        assert_eq!(result.confidence, 0.85);
    }

    #[test]
    fn test_narrow_winner_band() {
        // Ratio 1.2.
        let scores = vec![weighted('A', 60.0), weighted('B', 50.0)];
        let result = decide(&scores, false, &Tuning::default());
        assert_eq!(result.confidence, 0.70);
    }

    #[test]
    fn test_marginal_winner_band() {
        // Ratio 1.05.
        let scores = vec![weighted('A', 105.0), weighted('B', 100.0)];
        let result = decide(&scores, false, &Tuning::default());
        assert_eq!(result.confidence, 0.55);
    }

    #[test]
    fn test_zero_runner_up_is_clear_winner() {
        let scores = vec![weighted('A', 40.0), weighted('B', 0.0)];
        let result = decide(&scores, false, &Tuning::default());
        assert_eq!(result.answer, "A");
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_no_evidence_weak_default() {
        let scores = vec![weighted('A', 0.0), weighted('B', 0.0), weighted('C', 0.0)];
        let result = decide(&scores, false, &Tuning::default());

        // First option wins the tie; confidence sits at the weak default.
        assert_eq!(result.answer, "A");
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.evidence, "No direct textual evidence found.");
        assert!(result.explanation.contains("No strong evidence"));
    }

    #[test]
    fn test_ties_keep_option_order() {
        let scores = vec![weighted('A', 50.0), weighted('B', 50.0), weighted('C', 50.0)];
        let result = decide(&scores, false, &Tuning::default());
        assert_eq!(result.answer, "A");
        // Ratio 1.0 lands in the marginal band.
        assert_eq!(result.confidence, 0.55);
    }

    // ========================================
    // Negative questions
    // ========================================

    #[test]
    fn test_contrast_wins_outright() {
        let scores = vec![
            weighted('A', 300.0),
            weighted('B', 200.0),
            contrast('C', "Green is a secondary color."),
            weighted('D', 250.0),
        ];
        let result = decide(&scores, true, &Tuning::default());

        assert_eq!(result.answer, "C");
        assert_eq!(result.confidence, 0.98);
        assert_eq!(result.evidence, "Green is a secondary color.");
        assert!(result.explanation.contains("contrasts option C"));
    }

    #[test]
    fn test_strong_inversion() {
        // Two options above the high-support floor, worst nearly unsupported.
        let scores = vec![weighted('A', 80.0), weighted('B', 45.0), weighted('C', 5.0)];
        let result = decide(&scores, true, &Tuning::default());

        assert_eq!(result.answer, "C");
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_clear_inversion() {
        // Only one option is highly supported; worst is under 30% of best.
        let scores = vec![weighted('A', 100.0), weighted('B', 20.0)];
        let result = decide(&scores, true, &Tuning::default());

        assert_eq!(result.answer, "B");
        assert_eq!(result.confidence, 0.75);
    }

    #[test]
    fn test_weak_inversion() {
        // Scores too close for a confident call; inversion still applies.
        let scores = vec![weighted('A', 50.0), weighted('B', 40.0)];
        let result = decide(&scores, true, &Tuning::default());

        assert_eq!(result.answer, "B");
        assert_eq!(result.confidence, 0.6);
        assert!(result.explanation.contains("least supported"));
    }

    #[test]
    fn test_negative_all_zero_picks_last_in_order() {
        let scores = vec![weighted('A', 0.0), weighted('B', 0.0), weighted('C', 0.0)];
        let result = decide(&scores, true, &Tuning::default());

        // Stable sort keeps option order; the "worst" is the last option.
        assert_eq!(result.answer, "C");
        assert_eq!(result.confidence, 0.6);
    }

    // ========================================
    // Degenerate input
    // ========================================

    #[test]
    fn test_empty_scores_degrade_to_stub() {
        let result = decide(&[], false, &Tuning::default());
        assert_eq!(result.method, SearchMethod::Direct);
        assert!(result.answer.is_empty());
    }

    #[test]
    fn test_confidence_always_in_bounds() {
        let cases: Vec<(Vec<OptionScore>, bool)> = vec![
            (vec![weighted('A', 0.0), weighted('B', 0.0)], false),
            (vec![weighted('A', 1000.0), weighted('B', 1.0)], false),
            (vec![weighted('A', 10.0), weighted('B', 9.0)], true),
            (vec![contrast('A', "x"), weighted('B', 9.0)], true),
        ];
        for (scores, negative) in cases {
            let r = decide(&scores, negative, &Tuning::default());
            assert!((0.0..=1.0).contains(&r.confidence));
        }
    }
}
