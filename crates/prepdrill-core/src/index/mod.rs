//! Retrieval index
//!
//! Provides:
//! - Sliding-window chunking with overlap
//! - Lexical TF-IDF index with cosine-ranked top-k queries
//! - Size-bounded context assembly for LLM prompts

mod chunker;
mod lexical;
mod stopwords;

pub use chunker::{chunk, DEFAULT_CHUNK_MAX_CHARS, DEFAULT_CHUNK_OVERLAP};
pub use lexical::{
    IndexStats, LexicalIndex, SharedIndex, CONTEXT_SEPARATOR, NO_CONTEXT_SENTINEL,
};
pub use stopwords::is_stop_word;
