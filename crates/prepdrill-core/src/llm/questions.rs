//! Interview question generation

use crate::error::{PrepdrillError, Result};
use crate::llm::{ChatMessage, LLMClient};
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;

const INTERVIEWER_STYLE: &str = "You are a chief interviewer at a top technology company. \
     Be rigorous but fair, prefer practical scenarios, and keep wording concise.";

/// Parameters for a question generation request
#[derive(Debug, Clone)]
pub struct QuestionRequest {
    pub role: String,
    pub experience: String,
    pub topics: Vec<String>,
    pub n_questions: usize,
}

impl QuestionRequest {
    /// Topic focus line, defaulting when the caller named none
    pub fn topics_line(&self) -> String {
        if self.topics.is_empty() {
            "core fundamentals".to_string()
        } else {
            self.topics.join(", ")
        }
    }

    /// Retrieval query used to pull job-description context
    pub fn query_text(&self) -> String {
        format!("{} {} {}", self.experience, self.role, self.topics_line())
    }
}

/// Question generator using an LLM collaborator
pub struct QuestionGenerator {
    client: Arc<dyn LLMClient>,
}

impl QuestionGenerator {
    /// Create from LLM client
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self { client }
    }

    /// Generate a question batch grounded in retrieved context
    pub async fn generate(
        &self,
        request: &QuestionRequest,
        context: &str,
    ) -> Result<Vec<String>> {
        let prompt = build_question_prompt(request, context);

        let messages = vec![
            ChatMessage::system(INTERVIEWER_STYLE),
            ChatMessage::user(prompt),
        ];

        let response = self.client.chat_completion(messages).await?;
        let questions = parse_question_lines(&response, request.n_questions);

        if questions.is_empty() {
            return Err(PrepdrillError::Llm(
                "model returned no usable questions".to_string(),
            ));
        }

        Ok(questions)
    }

    /// Get model name
    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }
}

fn build_question_prompt(request: &QuestionRequest, context: &str) -> String {
    format!(
        r#"Generate {} technical interview questions for a {} {}.
Focus on {}. Vary difficulty (easy/medium/hard).
If the context is relevant, use it to make the questions job-specific.

Context (optional):
{}

Return the questions as a numbered list. Do not include answers."#,
        request.n_questions,
        request.experience,
        request.role,
        request.topics_line(),
        context
    )
}

lazy_static! {
    // A line counts as a question when it is numbered, Q-prefixed, or
    // ends with a question mark.
    static ref QUESTION_LINE: Regex =
        Regex::new(r"(?i)^(\d+[.):]?\s+|q\d*[.):]?\s+)|\?\s*$").unwrap();
}

/// Pick question lines out of a completion, at most `limit`
///
/// Lines are trimmed of surrounding whitespace and list dashes. When
/// nothing looks like a question the whole response degrades to its
/// non-empty lines, so a prose-only completion still yields output.
fn parse_question_lines(text: &str, limit: usize) -> Vec<String> {
    let lines: Vec<String> = text
        .lines()
        .map(|line| line.trim().trim_start_matches('-').trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    let mut questions: Vec<String> = lines
        .iter()
        .filter(|line| QUESTION_LINE.is_match(line))
        .cloned()
        .collect();

    if questions.is_empty() {
        questions = lines;
    }

    questions.truncate(limit);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_line_defaults() {
        let request = QuestionRequest {
            role: "Backend Engineer".to_string(),
            experience: "Senior".to_string(),
            topics: Vec::new(),
            n_questions: 5,
        };
        assert_eq!(request.topics_line(), "core fundamentals");
        assert_eq!(
            request.query_text(),
            "Senior Backend Engineer core fundamentals"
        );
    }

    #[test]
    fn test_topics_line_joined() {
        let request = QuestionRequest {
            role: "Backend Engineer".to_string(),
            experience: "Senior".to_string(),
            topics: vec!["async".to_string(), "databases".to_string()],
            n_questions: 5,
        };
        assert_eq!(request.topics_line(), "async, databases");
    }

    #[test]
    fn test_parse_numbered_list() {
        let text = "1. What is ownership?\n2. Explain lifetimes.\n3. What does Send mean?";
        let questions = parse_question_lines(text, 5);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0], "1. What is ownership?");
    }

    #[test]
    fn test_parse_skips_preamble() {
        let text = "Here are your questions:\n\n1. What is ownership?\n2. Explain lifetimes.";
        let questions = parse_question_lines(text, 5);
        assert_eq!(questions.len(), 2);
        assert!(questions[0].starts_with("1."));
    }

    #[test]
    fn test_parse_question_mark_lines() {
        let text = "How does borrow checking work?\nDescribe the async runtime.";
        let questions = parse_question_lines(text, 5);
        assert_eq!(questions, vec!["How does borrow checking work?"]);
    }

    #[test]
    fn test_parse_q_prefixed_lines() {
        let text = "Q1. Explain move semantics\nQ2. Explain trait objects";
        let questions = parse_question_lines(text, 5);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_parse_dashed_list() {
        let text = "- 1. What is ownership?\n- 2. Explain lifetimes.";
        let questions = parse_question_lines(text, 5);
        assert_eq!(questions[0], "1. What is ownership?");
    }

    #[test]
    fn test_parse_prose_fallback() {
        let text = "Ownership rules.\nBorrowing rules.";
        let questions = parse_question_lines(text, 5);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_parse_truncates_to_limit() {
        let text = "1. a?\n2. b?\n3. c?\n4. d?\n5. e?\n6. f?";
        let questions = parse_question_lines(text, 3);
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn test_parse_empty_response() {
        assert!(parse_question_lines("", 5).is_empty());
    }

    #[test]
    fn test_prompt_embeds_context_and_counts() {
        let request = QuestionRequest {
            role: "Data Engineer".to_string(),
            experience: "Mid-level".to_string(),
            topics: vec!["SQL".to_string()],
            n_questions: 4,
        };
        let prompt = build_question_prompt(&request, "(no context available)");
        assert!(prompt.contains("Generate 4 technical interview questions"));
        assert!(prompt.contains("Mid-level Data Engineer"));
        assert!(prompt.contains("Focus on SQL."));
        assert!(prompt.contains("(no context available)"));
    }
}
