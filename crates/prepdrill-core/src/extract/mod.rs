//! Document text extraction
//!
//! Turns raw job-description documents into a single normalized text
//! string ready for chunking. PDF bytes go through `pdf-extract`;
//! anything else is read as UTF-8 text.

use crate::error::{PrepdrillError, Result};
use std::fs;
use std::path::Path;

/// Extract text from PDF bytes and collapse all whitespace runs
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        PrepdrillError::Extraction(format!("Failed to extract text from PDF: {}", e))
    })?;

    let text = normalize_whitespace(&text);
    if text.is_empty() {
        return Err(PrepdrillError::Extraction(
            "PDF contains no extractable text (may be image-based)".to_string(),
        ));
    }

    Ok(text)
}

/// Extract normalized text from a document on disk
///
/// Dispatches on extension: `.pdf` via `pdf-extract`, everything else
/// read as UTF-8 text.
pub fn extract_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PrepdrillError::InvalidInput(format!(
            "Document does not exist: {}",
            path.display()
        )));
    }

    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        let bytes = fs::read(path).map_err(|e| {
            PrepdrillError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read PDF file {:?}: {}", path, e),
            ))
        })?;
        extract_pdf_text(&bytes)
    } else {
        let raw = fs::read_to_string(path).map_err(|e| {
            PrepdrillError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read document {:?}: {}", path, e),
            ))
        })?;
        let text = normalize_whitespace(&raw);
        if text.is_empty() {
            return Err(PrepdrillError::Extraction(format!(
                "Document {:?} contains no text",
                path
            )));
        }
        Ok(text)
    }
}

/// Collapse all whitespace runs (newlines included) to single spaces
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(
            normalize_whitespace("Senior\n\nRust   Engineer\t(remote)"),
            "Senior Rust Engineer (remote)"
        );
    }

    #[test]
    fn test_normalize_trims_ends() {
        assert_eq!(normalize_whitespace("  hello world  "), "hello world");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_whitespace("   \n\t "), "");
    }

    #[test]
    fn test_extract_missing_document() {
        let result = extract_document(Path::new("/nonexistent/jd.pdf"));
        assert!(matches!(result, Err(PrepdrillError::InvalidInput(_))));
    }

    #[test]
    fn test_extract_text_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jd.txt");
        std::fs::write(&path, "Backend engineer.\nRust, Tokio,\n\nPostgres.").unwrap();

        let text = extract_document(&path).unwrap();
        assert_eq!(text, "Backend engineer. Rust, Tokio, Postgres.");
    }

    #[test]
    fn test_extract_empty_text_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "  \n ").unwrap();

        let result = extract_document(&path);
        assert!(matches!(result, Err(PrepdrillError::Extraction(_))));
    }

    #[test]
    fn test_extract_garbage_pdf_bytes_fails() {
        let result = extract_pdf_text(b"not a pdf at all");
        assert!(matches!(result, Err(PrepdrillError::Extraction(_))));
    }
}
