//! Rubric-based answer grading

use crate::error::{PrepdrillError, Result};
use crate::llm::{ChatMessage, LLMClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const GRADER_STYLE: &str = "You are a chief interviewer at a top technology company. \
     Grade answers strictly but fairly. Be specific and actionable in feedback.";

/// Highest achievable rubric score
pub const MAX_SCORE: i64 = 10;

/// A candidate answer to grade
#[derive(Debug, Clone)]
pub struct FeedbackRequest {
    pub question: String,
    pub answer: String,
    pub role: Option<String>,
    pub experience: Option<String>,
}

/// Grading result with score clamped to [0, 10]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradingReport {
    pub score: u8,
    pub verdict: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggested_answer: String,
}

impl GradingReport {
    /// Fallback report substituted when the model response cannot be
    /// parsed
    pub fn unparseable() -> Self {
        Self {
            score: 0,
            verdict: "Could not parse the model response.".to_string(),
            strengths: Vec::new(),
            improvements: vec!["Please retry.".to_string()],
            suggested_answer: String::new(),
        }
    }
}

/// Wire shape of the model's JSON; every field defaulted so partial
/// responses still land
#[derive(Debug, Deserialize)]
struct RawGradingReport {
    #[serde(default)]
    score: i64,
    #[serde(default)]
    verdict: String,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    improvements: Vec<String>,
    #[serde(default)]
    suggested_answer: String,
}

/// Parse a grading report out of an LLM completion
///
/// Tolerates markdown code fences and surrounding prose by taking the
/// outermost `{...}` object. The score is clamped to [0, 10]
/// unconditionally.
pub fn parse_grading_report(response: &str) -> Result<GradingReport> {
    let json_str = extract_json_object(response).ok_or_else(|| {
        PrepdrillError::Parse("no JSON object in model response".to_string())
    })?;

    let raw: RawGradingReport = serde_json::from_str(json_str)
        .map_err(|e| PrepdrillError::Parse(format!("grading JSON did not parse: {}", e)))?;

    Ok(GradingReport {
        score: raw.score.clamp(0, MAX_SCORE) as u8,
        verdict: raw.verdict,
        strengths: raw.strengths,
        improvements: raw.improvements,
        suggested_answer: raw.suggested_answer,
    })
}

/// Extract the outermost JSON object from a completion
fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&response[start..=end])
}

/// Answer grader using an LLM collaborator
pub struct AnswerGrader {
    client: Arc<dyn LLMClient>,
}

impl AnswerGrader {
    /// Create from LLM client
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self { client }
    }

    /// Grade an answer against retrieved job-description context
    ///
    /// A completion that cannot be parsed degrades to the fallback
    /// report instead of propagating an error to the candidate.
    pub async fn grade(
        &self,
        request: &FeedbackRequest,
        context: &str,
    ) -> Result<GradingReport> {
        let prompt = build_grading_prompt(request, context);

        let messages = vec![
            ChatMessage::system(GRADER_STYLE),
            ChatMessage::user(prompt),
        ];

        let response = self.client.chat_completion(messages).await?;

        let report = match parse_grading_report(&response) {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!("falling back to unparseable grading report: {}", e);
                GradingReport::unparseable()
            }
        };

        Ok(report)
    }

    /// Get model name
    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }
}

fn build_grading_prompt(request: &FeedbackRequest, context: &str) -> String {
    format!(
        r#"Question:
{}

Candidate Answer:
"""{}"""

Optional Context (job description or topics):
{}

Return STRICT JSON with the following keys:
{{
  "score": <integer 0-10>,
  "verdict": "<one-sentence summary>",
  "strengths": ["<bullet>", "..."],
  "improvements": ["<bullet>", "..."],
  "suggested_answer": "<a strong model answer (concise)>"
}}
Only output JSON. No extra text."#,
        request.question, request.answer, context
    )
}
