//! JSON output formatter

use super::RankedChunk;
use anyhow::Result;
use prepdrill_core::GradingReport;
use serde_json::json;

pub fn format_ranked_chunks(results: &[RankedChunk]) -> Result<String> {
    let mut output = serde_json::to_string_pretty(&json!({ "results": results }))?;
    output.push('\n');
    Ok(output)
}

pub fn format_questions(questions: &[String]) -> Result<String> {
    let mut output = serde_json::to_string_pretty(&json!({ "questions": questions }))?;
    output.push('\n');
    Ok(output)
}

pub fn format_grading_report(report: &GradingReport) -> Result<String> {
    let mut output = serde_json::to_string_pretty(report)?;
    output.push('\n');
    Ok(output)
}
