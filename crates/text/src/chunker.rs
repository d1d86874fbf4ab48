//! Overlapping document chunker
//!
//! Splits a full document into fixed-size character windows that overlap
//! their neighbors, so a match spanning a window boundary is always whole in
//! at least one chunk. Bounds the cost of deep analysis on large documents:
//! later stages rank chunks and keep only the densest few.

/// A contiguous slice of the source document
///
/// Chunks overlap their neighbors by the configured overlap; the final chunk
/// may be shorter than the nominal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Chunk text
    pub text: String,
}

impl Chunk {
    /// Create a chunk from text
    pub fn new(text: impl Into<String>) -> Self {
        Chunk { text: text.into() }
    }
}

/// Split text into overlapping character windows
///
/// Sizes are in characters (Unicode scalar values), not bytes, so multi-byte
/// input never splits inside a code point. If the text fits in one window a
/// single chunk equal to the input is returned. The stride between window
/// starts is clamped to at least one character, so this never loops forever
/// even on degenerate arguments; callers wanting validation use
/// `Tuning::validate`.
///
/// # Example
///
/// ```
/// use docquiz_text::chunker::chunk_text;
///
/// let chunks = chunk_text("abcdefghij", 4, 2);
/// assert_eq!(chunks[0].text, "abcd");
/// assert_eq!(chunks[1].text, "cdef");
/// ```
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<Chunk> {
    let char_count = text.chars().count();
    if char_count <= chunk_size {
        return vec![Chunk::new(text)];
    }

    let step = chunk_size.saturating_sub(overlap).max(1);
    let byte_offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();

    let mut chunks = Vec::with_capacity(char_count / step + 1);
    let mut start = 0;
    while start < char_count {
        let end = (start + chunk_size).min(char_count);
        let byte_start = byte_offsets[start];
        let byte_end = if end == char_count {
            text.len()
        } else {
            byte_offsets[end]
        };
        chunks.push(Chunk::new(&text[byte_start..byte_end]));
        start += step;
    }
    chunks
}
