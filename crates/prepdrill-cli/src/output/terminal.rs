//! Terminal output formatter

use super::RankedChunk;
use prepdrill_core::GradingReport;

pub fn format_ranked_chunks(results: &[RankedChunk]) -> String {
    if results.is_empty() {
        return "No results.\n".to_string();
    }

    let mut output = String::new();
    for result in results {
        let score_pct = (result.score * 100.0) as u32;
        output.push_str(&format!("{:>3}% #{}\n", score_pct, result.index));

        let preview: String = result.text.chars().take(160).collect();
        output.push_str(&format!("  {}\n", preview));
        if result.text.chars().count() > 160 {
            output.push_str("  ...\n");
        }
    }

    output
}

pub fn format_questions(questions: &[String]) -> String {
    let mut output = String::new();
    for question in questions {
        output.push_str(question);
        output.push('\n');
    }
    output
}

pub fn format_grading_report(report: &GradingReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Score: {}/10\n", report.score));
    output.push_str(&format!("Verdict: {}\n", report.verdict));

    if !report.strengths.is_empty() {
        output.push_str("\nStrengths:\n");
        for item in &report.strengths {
            output.push_str(&format!("  + {}\n", item));
        }
    }

    if !report.improvements.is_empty() {
        output.push_str("\nImprovements:\n");
        for item in &report.improvements {
            output.push_str(&format!("  - {}\n", item));
        }
    }

    if !report.suggested_answer.is_empty() {
        output.push_str("\nSuggested answer:\n");
        output.push_str(&format!("  {}\n", report.suggested_answer));
    }

    output
}
