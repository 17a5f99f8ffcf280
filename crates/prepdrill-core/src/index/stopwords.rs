//! English stop words for lexical weighting
//!
//! High-frequency terms carry no ranking signal for job-description
//! retrieval; build and query tokenization drop them before weighting.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Common English stop words removed during tokenization
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most",
    "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself",
];

lazy_static! {
    static ref STOP_WORD_SET: HashSet<&'static str> =
        ENGLISH_STOP_WORDS.iter().copied().collect();
}

/// Check whether a lowercased term is an English stop word
pub fn is_stop_word(term: &str) -> bool {
    STOP_WORD_SET.contains(term)
}
