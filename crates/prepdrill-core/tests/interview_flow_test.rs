//! Interview flow tests with a scripted LLM collaborator
//!
//! The generator and grader only need "messages in, text out" from the
//! LLM; a canned client exercises both prompt flows offline.

use async_trait::async_trait;
use prepdrill_core::{
    AnswerGrader, ChatMessage, FeedbackRequest, LLMClient, QuestionGenerator, QuestionRequest,
    Result, Session,
};
use std::sync::Arc;

struct CannedLLM {
    response: String,
}

impl CannedLLM {
    fn new(response: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: response.into(),
        })
    }
}

#[async_trait]
impl LLMClient for CannedLLM {
    async fn chat_completion(&self, _messages: Vec<ChatMessage>) -> Result<String> {
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "canned-test-model"
    }
}

fn sample_request() -> QuestionRequest {
    QuestionRequest {
        role: "Backend Engineer".to_string(),
        experience: "Senior".to_string(),
        topics: vec!["distributed systems".to_string()],
        n_questions: 3,
    }
}

#[tokio::test]
async fn test_generate_questions_from_numbered_list() {
    let client = CannedLLM::new(
        "1. How do you shard a hot partition?\n\
         2. Explain consensus trade-offs.\n\
         3. Describe a failure you debugged.\n\
         4. Extra question beyond the limit?",
    );
    let generator = QuestionGenerator::new(client);

    let questions = generator
        .generate(&sample_request(), "(no context available)")
        .await
        .unwrap();

    assert_eq!(questions.len(), 3);
    assert!(questions[0].contains("shard"));
}

#[tokio::test]
async fn test_generate_questions_prose_fallback() {
    let client = CannedLLM::new("Ask about replication.\nAsk about backpressure.");
    let generator = QuestionGenerator::new(client);

    let questions = generator
        .generate(&sample_request(), "(no context available)")
        .await
        .unwrap();

    assert_eq!(questions.len(), 2);
}

#[tokio::test]
async fn test_generate_questions_empty_response_errors() {
    let client = CannedLLM::new("");
    let generator = QuestionGenerator::new(client);

    let result = generator
        .generate(&sample_request(), "(no context available)")
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_grade_answer_with_fenced_json() {
    let client = CannedLLM::new(
        "```json\n{\"score\": 8, \"verdict\": \"Strong answer.\", \
         \"strengths\": [\"covers quorum reads\"], \"improvements\": [], \
         \"suggested_answer\": \"...\"}\n```",
    );
    let grader = AnswerGrader::new(client);

    let report = grader
        .grade(
            &FeedbackRequest {
                question: "How do quorum reads work?".to_string(),
                answer: "A majority of replicas must respond.".to_string(),
                role: None,
                experience: None,
            },
            "(no context available)",
        )
        .await
        .unwrap();

    assert_eq!(report.score, 8);
    assert_eq!(report.verdict, "Strong answer.");
}

#[tokio::test]
async fn test_grade_answer_clamps_out_of_range_score() {
    let client = CannedLLM::new(r#"{"score": 42, "verdict": "too kind"}"#);
    let grader = AnswerGrader::new(client);

    let report = grader
        .grade(
            &FeedbackRequest {
                question: "q".to_string(),
                answer: "a".to_string(),
                role: None,
                experience: None,
            },
            "(no context available)",
        )
        .await
        .unwrap();

    assert_eq!(report.score, 10);
}

#[tokio::test]
async fn test_grade_answer_falls_back_on_garbage() {
    let client = CannedLLM::new("I refuse to answer in JSON today.");
    let grader = AnswerGrader::new(client);

    let report = grader
        .grade(
            &FeedbackRequest {
                question: "q".to_string(),
                answer: "a".to_string(),
                role: None,
                experience: None,
            },
            "(no context available)",
        )
        .await
        .unwrap();

    assert_eq!(report.score, 0);
    assert_eq!(report.verdict, "Could not parse the model response.");
    assert_eq!(report.improvements, vec!["Please retry."]);
}

#[tokio::test]
async fn test_session_grounds_generation_context() {
    let session = Session::default();
    session
        .ingest(
            "Senior backend engineer. Responsibilities include scaling a \
             distributed job queue, operating Kafka, and mentoring. \
             Requirements: Rust, Tokio, Postgres, on-call rotation.",
        )
        .unwrap();

    let request = sample_request();
    let context = session.index().context_for(&request.query_text(), 6, 1600);
    assert!(context.contains("engineer"));

    let client = CannedLLM::new("1. How would you scale our job queue?");
    let generator = QuestionGenerator::new(client);
    let questions = generator.generate(&request, &context).await.unwrap();

    session.remember_questions(questions.clone());
    assert_eq!(session.latest_questions(), questions);
}
