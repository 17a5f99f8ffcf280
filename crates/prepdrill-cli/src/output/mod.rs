//! Output formatters

mod json;
mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use prepdrill_core::GradingReport;
use serde::Serialize;

/// A ranked chunk ready for display
#[derive(Debug, Serialize)]
pub struct RankedChunk {
    pub index: usize,
    pub score: f32,
    pub text: String,
}

/// Format ranked search results
pub fn format_ranked_chunks(results: &[RankedChunk], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_ranked_chunks(results),
        OutputFormat::Cli => Ok(terminal::format_ranked_chunks(results)),
    }
}

/// Format a generated question batch
pub fn format_questions(questions: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_questions(questions),
        OutputFormat::Cli => Ok(terminal::format_questions(questions)),
    }
}

/// Format a grading report
pub fn format_grading_report(report: &GradingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_grading_report(report),
        OutputFormat::Cli => Ok(terminal::format_grading_report(report)),
    }
}
