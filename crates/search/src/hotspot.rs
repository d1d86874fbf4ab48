//! Hotspot selection
//!
//! Ranks document chunks by keyword-density overlap with the question and
//! keeps only the densest few, discarding the rest of the document from
//! sentence-level scoring. This bounds deep-analysis cost to a fixed number
//! of windows regardless of document size.

use docquiz_text::chunker::Chunk;
use docquiz_text::tokenizer::tokenize;
use std::collections::HashSet;

/// Rank chunks by question-keyword density and keep the top `cap`
///
/// Density for a chunk is `|question_tokens ∩ chunk_tokens| /
/// max(|chunk_tokens|, 1)`. The sort is stable and descending, so ties keep
/// original document order. When there are no more than `cap` chunks the
/// document is small enough to analyze whole and all chunk texts are
/// returned unchanged.
pub fn find_hotspots(chunks: &[Chunk], question_tokens: &HashSet<String>, cap: usize) -> Vec<String> {
    if chunks.len() <= cap {
        return chunks.iter().map(|c| c.text.clone()).collect();
    }

    let mut ranked: Vec<(f64, &Chunk)> = chunks
        .iter()
        .map(|chunk| (density(chunk, question_tokens), chunk))
        .collect();

    // Stable sort: equal densities keep document order.
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    ranked
        .into_iter()
        .take(cap)
        .map(|(_, chunk)| chunk.text.clone())
        .collect()
}

/// Fraction of a chunk's tokens that overlap the question tokens
fn density(chunk: &Chunk, question_tokens: &HashSet<String>) -> f64 {
    let chunk_tokens = tokenize(&chunk.text);
    let overlap = chunk_tokens.intersection(question_tokens).count();
    overlap as f64 / chunk_tokens.len().max(1) as f64
}
