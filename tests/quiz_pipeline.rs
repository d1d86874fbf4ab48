//! End-to-end pipeline scenarios
//!
//! Exercises the full parse -> chunk -> hotspot -> score -> decide flow
//! through the public API, including the negative-question contrast path and
//! the graceful-degradation guarantees.

use docquiz::{detect_quiz_question, search, solve_quiz, QuizSolver, SearchMethod, Tuning};

// ============================================================================
// Test Helpers
// ============================================================================

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

const CELL_DOCUMENT: &str =
    "The mitochondria is the powerhouse of the cell, generating most of the cell's \
     supply of ATP.";

const COLOR_DOCUMENT: &str =
    "The primary colors are Red, Blue, and Yellow. Green is a secondary color formed \
     by mixing Blue and Yellow.";

// ============================================================================
// Standard quiz questions
// ============================================================================

#[test]
fn standard_quiz_clear_winner() {
    init_logging();
    let result = search(
        "What is known as the powerhouse of the cell? A) The Nucleus B) The Mitochondria \
         C) The Ribosome D) The Golgi Apparatus",
        CELL_DOCUMENT,
    );

    assert_eq!(result.answer, "B");
    assert!(result.confidence >= 0.85, "confidence was {}", result.confidence);
    assert_eq!(result.method, SearchMethod::Quiz);
    assert!(result.evidence.to_lowercase().contains("mitochondria"));
}

#[test]
fn standard_quiz_via_solve_quiz() {
    let parsed = detect_quiz_question(
        "What is known as the powerhouse of the cell? A) The Nucleus B) The Mitochondria",
    );
    assert!(parsed.is_quiz);

    let result = solve_quiz(&parsed, CELL_DOCUMENT);
    assert_eq!(result.answer, "B");
}

// ============================================================================
// Negative questions
// ============================================================================

#[test]
fn negative_quiz_contrast_evidence() {
    init_logging();
    let result = search(
        "Which of these is NOT a primary color? A. Red B. Blue C. Green D. Yellow",
        COLOR_DOCUMENT,
    );

    assert_eq!(result.answer, "C");
    assert!((result.confidence - 0.98).abs() < 1e-9, "confidence was {}", result.confidence);
    assert!(result.evidence.contains("secondary"));
    assert_eq!(result.method, SearchMethod::Quiz);
}

#[test]
fn negative_quiz_inversion_without_contrast() {
    // No antonym pairing in the text; the pipeline falls back to picking the
    // least supported option.
    let result = search(
        "Which of these is NOT a planet? A) Mars B) Venus C) Harmonica D) Jupiter",
        "Mars is a planet. Venus is a planet close to Earth. Jupiter is the largest \
         planet in the solar system.",
    );

    assert_eq!(result.answer, "C");
    assert!(result.confidence >= 0.6);
    assert!(result.confidence <= 0.95);
}

// ============================================================================
// Degradation paths
// ============================================================================

#[test]
fn quiz_with_no_evidence_still_answers() {
    let result = search(
        "Which cheese is oldest? A) cheddar B) gouda C) brie",
        "Completely unrelated text about orbital mechanics and rocket staging.",
    );

    assert_eq!(result.answer.len(), 1);
    assert!((result.confidence - 0.5).abs() < 1e-9);
    assert_eq!(result.method, SearchMethod::Quiz);
    assert!(result.explanation.contains("No strong evidence"));
}

#[test]
fn non_quiz_input_returns_direct_stub() {
    let result = search("Tell me about mitochondria", CELL_DOCUMENT);

    assert_eq!(result.method, SearchMethod::Direct);
    assert_eq!(result.answer, "");
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn single_option_is_not_a_quiz() {
    let parsed = detect_quiz_question("Is this a quiz? A) only one option");
    assert!(!parsed.is_quiz);

    let result = search("Is this a quiz? A) only one option", CELL_DOCUMENT);
    assert_eq!(result.method, SearchMethod::Direct);
}

// ============================================================================
// Large documents
// ============================================================================

#[test]
fn large_document_hotspot_path_finds_answer() {
    let mut document = String::new();
    for i in 0..400 {
        document.push_str(&format!(
            "Section {i} covers crop rotation, irrigation schedules, and soil drainage \
             in exhaustive detail. "
        ));
    }
    document.push_str(CELL_DOCUMENT);

    let result = search(
        "What is known as the powerhouse of the cell? A) The Nucleus B) The Mitochondria \
         C) The Ribosome D) The Golgi Apparatus",
        &document,
    );

    assert_eq!(result.answer, "B");
    assert!(result.confidence >= 0.85);
}

// ============================================================================
// Custom tuning
// ============================================================================

#[test]
fn custom_tuning_is_validated() {
    let invalid = Tuning::default().with_chunk_size(100).with_chunk_overlap(100);
    assert!(QuizSolver::with_tuning(invalid).is_err());

    let solver = QuizSolver::with_tuning(Tuning::with_small_windows()).unwrap();
    let result = solver.search(
        "Which of these is NOT a primary color? A. Red B. Blue C. Green D. Yellow",
        COLOR_DOCUMENT,
    );
    assert_eq!(result.method, SearchMethod::Quiz);
}

// ============================================================================
// Result shape
// ============================================================================

#[test]
fn confidence_in_bounds_on_every_path() {
    let cases = [
        ("What? A) one B) two", "one is the loneliest number, so it is."),
        ("Which is NOT true? A) up B) down", "Up is a direction. Down is false here."),
        ("Not a quiz at all", "irrelevant"),
        ("Which? A) alpha B) beta C) gamma D) delta E) epsilon", ""),
    ];
    for (question, document) in cases {
        let result = search(question, document);
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence {} out of bounds for {question:?}",
            result.confidence
        );
    }
}

#[test]
fn result_serializes_for_host_application() {
    let result = search(
        "Which of these is NOT a primary color? A. Red B. Blue C. Green D. Yellow",
        COLOR_DOCUMENT,
    );

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["answer"], "C");
    assert_eq!(json["method"], "quiz");
    assert!(json["confidence"].as_f64().unwrap() > 0.9);
}
