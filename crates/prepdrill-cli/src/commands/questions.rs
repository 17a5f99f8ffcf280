//! Questions command

use crate::app::{OutputFormat, QuestionsArgs};
use crate::commands::ingest_session;
use crate::output::format_questions;
use anyhow::Result;
use prepdrill_core::{
    Config, HttpLLMClient, QuestionGenerator, QuestionRequest, NO_CONTEXT_SENTINEL,
};
use std::sync::Arc;

pub async fn run(args: QuestionsArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let request = QuestionRequest {
        role: args.role,
        experience: args.experience,
        topics: args.topics,
        n_questions: args.n_questions,
    };

    let context = match &args.jd {
        Some(document) => {
            let session = ingest_session(document, config)?;
            session.index().context_for(
                &request.query_text(),
                config.retrieval.questions_k,
                config.retrieval.questions_context_chars,
            )
        }
        None => NO_CONTEXT_SENTINEL.to_string(),
    };

    let client = Arc::new(HttpLLMClient::new(config.llm_service.clone())?);
    let generator = QuestionGenerator::new(client);
    let questions = generator.generate(&request, &context).await?;

    print!("{}", format_questions(&questions, format)?);
    Ok(())
}
