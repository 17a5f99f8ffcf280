//! Rehearsal session state
//!
//! One session covers one job description: the shared retrieval index
//! plus the latest generated question batch, owned explicitly instead
//! of living in module globals.

use crate::config::ChunkingConfig;
use crate::error::Result;
use crate::index::{chunk, IndexStats, SharedIndex};
use std::sync::{PoisonError, RwLock};

/// Process-lifetime rehearsal session
pub struct Session {
    index: SharedIndex,
    chunking: ChunkingConfig,
    questions: RwLock<Vec<String>>,
}

impl Session {
    /// Create a session with the given chunking policy
    pub fn new(chunking: ChunkingConfig) -> Self {
        Self {
            index: SharedIndex::new(),
            chunking,
            questions: RwLock::new(Vec::new()),
        }
    }

    /// Handle to the shared retrieval index
    pub fn index(&self) -> &SharedIndex {
        &self.index
    }

    /// Chunk normalized document text and (re)build the index
    ///
    /// A failed build leaves any previously ingested document
    /// queryable.
    pub fn ingest(&self, text: &str) -> Result<IndexStats> {
        let chunks = chunk(text, self.chunking.max_chars, self.chunking.overlap);
        self.index.build(chunks)?;
        let stats = self.index.stats();
        tracing::debug!(chunks = stats.chunks, terms = stats.vocabulary, "ingested document");
        Ok(stats)
    }

    /// Store the latest generated question batch for follow-up grading
    pub fn remember_questions(&self, questions: Vec<String>) {
        *self
            .questions
            .write()
            .unwrap_or_else(PoisonError::into_inner) = questions;
    }

    /// Latest generated question batch, empty before any generation
    pub fn latest_questions(&self) -> Vec<String> {
        self.questions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ChunkingConfig::default())
    }
}
