//! Lexical TF-IDF index
//!
//! Builds a term-weighted vector per chunk and answers top-k queries by
//! cosine similarity. The vocabulary and weight matrix are valid only
//! for the chunk sequence they were built from; a new build replaces
//! the whole state, never updates it.

use crate::error::{PrepdrillError, Result};
use crate::index::stopwords::is_stop_word;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

/// Separator between chunks in an assembled context string
pub const CONTEXT_SEPARATOR: &str = "\n---\n";

/// Placeholder returned when no context is available, so prompt
/// assembly can branch on it instead of an empty string
pub const NO_CONTEXT_SENTINEL: &str = "(no context available)";

/// Index statistics
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct IndexStats {
    pub chunks: usize,
    pub vocabulary: usize,
}

/// Built vocabulary, IDF weights and per-chunk vectors
///
/// Rows are L2-normalized, so cosine similarity reduces to a dot
/// product against an equally normalized query vector.
struct BuiltIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    matrix: Vec<Vec<f32>>,
    chunks: Vec<String>,
}

impl BuiltIndex {
    /// Project a query into the vocabulary space
    ///
    /// Out-of-vocabulary terms contribute zero weight; a query with no
    /// known terms yields the zero vector, which scores 0 against
    /// every chunk.
    fn query_vector(&self, query: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for term in tokenize(query) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                vector[idx] += self.idf[idx];
            }
        }
        l2_normalize(&mut vector);
        vector
    }
}

/// Index lifecycle state: no implicit None-checks
enum IndexState {
    Empty,
    Built(BuiltIndex),
}

/// Lexical TF-IDF index over a single document's chunks
///
/// Lifecycle: created Empty, built once per document upload (full
/// replace), queried zero or more times, replaced by the next build.
pub struct LexicalIndex {
    state: IndexState,
}

impl Default for LexicalIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            state: IndexState::Empty,
        }
    }

    /// Whether a build has populated the index
    pub fn is_built(&self) -> bool {
        matches!(self.state, IndexState::Built(_))
    }

    /// Chunk and vocabulary counts
    pub fn stats(&self) -> IndexStats {
        match &self.state {
            IndexState::Empty => IndexStats {
                chunks: 0,
                vocabulary: 0,
            },
            IndexState::Built(built) => IndexStats {
                chunks: built.chunks.len(),
                vocabulary: built.vocabulary.len(),
            },
        }
    }

    /// Get an indexed chunk by position
    pub fn chunk_text(&self, index: usize) -> Option<&str> {
        match &self.state {
            IndexState::Empty => None,
            IndexState::Built(built) => built.chunks.get(index).map(String::as_str),
        }
    }

    /// Build TF-IDF weights over the supplied chunks
    ///
    /// Replaces any prior vocabulary, matrix and chunk sequence. On
    /// error the previous state is left untouched: an empty chunk
    /// sequence must not be indexed, and chunks whose tokens are all
    /// stop words or punctuation produce no vocabulary to weight.
    pub fn build(&mut self, chunks: Vec<String>) -> Result<()> {
        if chunks.is_empty() {
            return Err(PrepdrillError::Build(
                "no chunks to index; document extraction produced no text".to_string(),
            ));
        }

        let token_lists: Vec<Vec<String>> = chunks.iter().map(|c| tokenize(c)).collect();

        // Document frequency per term, terms in sorted order for a
        // deterministic vocabulary layout.
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &token_lists {
            let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(PrepdrillError::Build(
                "chunks contain no indexable terms".to_string(),
            ));
        }

        let vocabulary: HashMap<String, usize> = doc_freq
            .keys()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
        let n = chunks.len() as f32;
        let mut idf = vec![0.0f32; vocabulary.len()];
        for (term, df) in &doc_freq {
            let idx = vocabulary[*term];
            idf[idx] = ((1.0 + n) / (1.0 + *df as f32)).ln() + 1.0;
        }

        let matrix: Vec<Vec<f32>> = token_lists
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0f32; vocabulary.len()];
                for term in tokens {
                    let idx = vocabulary[term.as_str()];
                    row[idx] += idf[idx];
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        tracing::debug!(
            chunks = chunks.len(),
            vocabulary = vocabulary.len(),
            "built lexical index"
        );

        self.state = IndexState::Built(BuiltIndex {
            vocabulary,
            idf,
            matrix,
            chunks,
        });
        Ok(())
    }

    /// Rank chunks against a query by cosine similarity
    ///
    /// Returns up to `k` `(chunk index, score)` pairs, best first; ties
    /// keep original chunk order. An unbuilt index degrades to an
    /// empty result rather than erroring.
    pub fn top_k(&self, query: &str, k: usize) -> Vec<(usize, f32)> {
        let built = match &self.state {
            IndexState::Empty => return Vec::new(),
            IndexState::Built(built) => built,
        };
        if k == 0 {
            return Vec::new();
        }

        let query_vec = built.query_vector(query);

        let mut scored: Vec<(usize, f32)> = built
            .matrix
            .iter()
            .enumerate()
            .map(|(idx, row)| (idx, dot(&query_vec, row)))
            .collect();

        // Stable sort: equal scores stay in original chunk order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }

    /// Assemble a size-bounded context string from ranked chunks
    ///
    /// Concatenates chunk texts in ranked order, joined by
    /// [`CONTEXT_SEPARATOR`], stopping after the chunk that makes the
    /// cumulative character count reach `max_chars`. Truncation happens
    /// at chunk granularity, so the result may slightly exceed the
    /// budget. With no results the sentinel placeholder is returned.
    pub fn context_for(&self, query: &str, k: usize, max_chars: usize) -> String {
        let picks = self.top_k(query, k);
        if picks.is_empty() {
            return NO_CONTEXT_SENTINEL.to_string();
        }

        let built = match &self.state {
            IndexState::Empty => return NO_CONTEXT_SENTINEL.to_string(),
            IndexState::Built(built) => built,
        };

        let mut pieces: Vec<&str> = Vec::new();
        let mut size = 0;
        for (idx, _score) in picks {
            let piece = built.chunks[idx].as_str();
            pieces.push(piece);
            size += piece.chars().count();
            if size >= max_chars {
                break;
            }
        }

        pieces.join(CONTEXT_SEPARATOR)
    }
}

/// Thread-safe handle to a process-wide index
///
/// `build` takes the write lock, so a reader never observes a
/// half-replaced vocabulary/matrix pair; queries take the read lock
/// and may run concurrently with each other.
#[derive(Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<LexicalIndex>>,
}

impl SharedIndex {
    /// Create a shared handle around an empty index
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(LexicalIndex::new())),
        }
    }

    /// Build the index, replacing any prior state
    pub fn build(&self, chunks: Vec<String>) -> Result<()> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .build(chunks)
    }

    /// Whether a build has populated the index
    pub fn is_built(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_built()
    }

    /// Chunk and vocabulary counts
    pub fn stats(&self) -> IndexStats {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .stats()
    }

    /// Get an indexed chunk by position
    pub fn chunk_text(&self, index: usize) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .chunk_text(index)
            .map(str::to_string)
    }

    /// Rank chunks against a query by cosine similarity
    pub fn top_k(&self, query: &str, k: usize) -> Vec<(usize, f32)> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .top_k(query, k)
    }

    /// Assemble a size-bounded context string from ranked chunks
    pub fn context_for(&self, query: &str, k: usize, max_chars: usize) -> String {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .context_for(query, k, max_chars)
    }
}

/// Split text into lowercased terms: maximal alphanumeric runs of
/// length >= 2, stop words removed
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|term| term.chars().count() >= 2)
        .filter(|term| !is_stop_word(term))
        .map(str::to_string)
        .collect()
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn l2_normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}
