//! Sliding-window text chunking
//!
//! Splits document text into fixed-width overlapping windows so
//! retrieval stays precise on long documents. Window positions are
//! measured in characters, never bytes, so chunk boundaries always
//! fall on valid UTF-8 char boundaries.

/// Default window width in characters
pub const DEFAULT_CHUNK_MAX_CHARS: usize = 1000;

/// Default overlap between consecutive windows
pub const DEFAULT_CHUNK_OVERLAP: usize = 120;

/// Split text into overlapping fixed-width chunks
///
/// Walks the text with a window of `max_chars` characters; after each
/// window the start offset advances by `max_chars - overlap`, so
/// consecutive chunks share `overlap` characters of context. The final
/// window may be shorter than `max_chars`; once a window reaches the
/// end of the text the walk stops without emitting a trailing
/// zero-length or duplicate chunk.
///
/// Fully deterministic and side-effect free.
///
/// # Panics
///
/// Panics unless `0 < overlap < max_chars`.
pub fn chunk(text: &str, max_chars: usize, overlap: usize) -> Vec<String> {
    assert!(max_chars > 0, "max_chars must be > 0");
    assert!(
        overlap > 0 && overlap < max_chars,
        "overlap must be in 1..max_chars"
    );

    let char_offsets: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
    let total = char_offsets.len();
    if total == 0 {
        return Vec::new();
    }

    let step = max_chars - overlap;
    let mut chunks = Vec::new();
    let mut start = 0;

    loop {
        let end = (start + max_chars).min(total);
        let byte_start = char_offsets[start];
        let byte_end = if end < total {
            char_offsets[end]
        } else {
            text.len()
        };
        chunks.push(text[byte_start..byte_end].to_string());

        if start + max_chars >= total {
            break;
        }
        start += step;
    }

    chunks
}
