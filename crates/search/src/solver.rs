//! Quiz-solving orchestrator
//!
//! Ties the pipeline stages together:
//! parse -> chunk -> select hotspots -> score options -> decide.
//!
//! # Stateless Design
//!
//! QuizSolver is STATELESS. It holds only its validated tuning; all per-query
//! state is ephemeral, so one solver can serve concurrent callers on
//! independent inputs without synchronization.

use crate::decision::decide;
use crate::hotspot::find_hotspots;
use crate::question::detect_quiz_question;
use crate::scorer::SentenceScorer;
use docquiz_core::{OptionScore, ParsedQuestion, Result, SmartSearchResult, Tuning};
use docquiz_text::chunker::chunk_text;
use docquiz_text::tokenizer::tokenize;
use tracing::debug;

// ============================================================================
// QuizSolver
// ============================================================================

/// Heuristic quiz answerer over one in-memory document
///
/// # Flow
///
/// ```text
/// question string          document text
///       │                        │
///       ▼                        ▼
/// ┌──────────┐   ┌──────────────────────────────┐
/// │  parser  │   │  chunker -> hotspot selector │
/// └────┬─────┘   └──────────────┬───────────────┘
///      │                        │
///      └────────┬───────────────┘
///               ▼
///      ┌─────────────────┐
///      │ sentence scorer │  (one pass per option)
///      └────────┬────────┘
///               ▼
///      ┌─────────────────┐
///      │ decision engine │
///      └────────┬────────┘
///               ▼
///        SmartSearchResult
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuizSolver {
    tuning: Tuning,
}

impl QuizSolver {
    /// Create a solver with the default (frozen) tuning
    pub fn new() -> Self {
        QuizSolver {
            tuning: Tuning::default(),
        }
    }

    /// Create a solver with custom tuning
    ///
    /// Fails when the tuning violates structural constraints (zero chunk
    /// size, overlap not smaller than chunk size, zero hotspot cap). This is
    /// the pipeline's only fallible surface; solving itself always returns a
    /// result.
    pub fn with_tuning(tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        Ok(QuizSolver { tuning })
    }

    /// The tuning this solver runs with
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Parse free-form input into a question model
    ///
    /// Tuning-independent; provided on the solver for API symmetry.
    pub fn detect(&self, input: &str) -> ParsedQuestion {
        detect_quiz_question(input)
    }

    /// Answer a parsed quiz question against a document
    ///
    /// A non-quiz `parsed` (fewer than 2 options) degrades to the
    /// zero-confidence direct stub rather than erroring.
    pub fn solve(&self, parsed: &ParsedQuestion, document: &str) -> SmartSearchResult {
        if !parsed.is_quiz {
            return SmartSearchResult::direct_stub();
        }

        // 1. Question keywords drive both hotspot ranking and scoring.
        let question_tokens = tokenize(&parsed.question_text);

        // 2. Chunk the document into overlapping windows.
        let chunks = chunk_text(document, self.tuning.chunk_size, self.tuning.chunk_overlap);

        // 3. Keep only the densest chunks.
        let hotspots = find_hotspots(&chunks, &question_tokens, self.tuning.hotspot_cap);
        debug!(
            chunks = chunks.len(),
            hotspots = hotspots.len(),
            negative = parsed.is_negative,
            "selected hotspots"
        );

        // 4. Score each option over the combined hotspot text.
        let hotspot_text = hotspots.join(" ");
        let scorer = SentenceScorer::new(&self.tuning, &hotspot_text, parsed);
        let scores: Vec<OptionScore> = parsed
            .options
            .iter()
            .map(|option| {
                let score = scorer.score_option(option);
                debug!(
                    letter = %score.letter,
                    weight = score.weight(),
                    contrast = score.support.is_contrast(),
                    "scored option"
                );
                score
            })
            .collect();

        // 5. Decide.
        decide(&scores, parsed.is_negative, &self.tuning)
    }

    /// Convenience wrapper: detect, then solve or fall back to the stub
    pub fn search(&self, question: &str, document: &str) -> SmartSearchResult {
        let parsed = self.detect(question);
        debug!(
            is_quiz = parsed.is_quiz,
            options = parsed.options.len(),
            "parsed question"
        );
        if parsed.is_quiz {
            self.solve(&parsed, document)
        } else {
            SmartSearchResult::direct_stub()
        }
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Answer a parsed quiz question with the default tuning
pub fn solve_quiz(parsed: &ParsedQuestion, document: &str) -> SmartSearchResult {
    QuizSolver::new().solve(parsed, document)
}

/// Detect and answer a question in one call, with the default tuning
///
/// Non-quiz input yields a `method: direct` result with empty answer and
/// zero confidence; the caller owns any heavier fallback (e.g. a generative
/// model).
pub fn search(question: &str, document: &str) -> SmartSearchResult {
    QuizSolver::new().search(question, document)
}

// ============================================================================
// Tests
// ============================================================================
