//! CLI command implementations

pub mod feedback;
pub mod ingest;
pub mod questions;
pub mod search;

use anyhow::Result;
use prepdrill_core::{extract_document, Config, Session};
use std::path::Path;

/// Extract a document and build a fresh session index around it
pub fn ingest_session(document: &Path, config: &Config) -> Result<Session> {
    let text = extract_document(document)?;
    let session = Session::new(config.chunking);
    session.ingest(&text)?;
    Ok(session)
}
