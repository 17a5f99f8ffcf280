//! LLM integration
//!
//! Provides the chat-completion collaborator contract plus the two
//! prompt flows built on it:
//! - Interview question generation
//! - Rubric-based answer grading

mod client;
mod grading;
mod questions;

pub use client::{ChatMessage, HttpLLMClient, LLMClient};
pub use grading::{parse_grading_report, AnswerGrader, FeedbackRequest, GradingReport};
pub use questions::{QuestionGenerator, QuestionRequest};
