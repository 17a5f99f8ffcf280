//! Feedback command

use crate::app::{FeedbackArgs, OutputFormat};
use crate::commands::ingest_session;
use crate::output::format_grading_report;
use anyhow::Result;
use prepdrill_core::{
    AnswerGrader, Config, FeedbackRequest, HttpLLMClient, NO_CONTEXT_SENTINEL,
};
use std::sync::Arc;

pub async fn run(args: FeedbackArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let answer = match (&args.answer, &args.answer_file) {
        (Some(answer), _) => answer.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => anyhow::bail!("provide --answer or --answer-file"),
    };
    if answer.trim().is_empty() {
        anyhow::bail!("candidate answer cannot be empty");
    }

    let request = FeedbackRequest {
        question: args.question,
        answer,
        role: args.role,
        experience: args.experience,
    };

    let context = match &args.jd {
        Some(document) => {
            let session = ingest_session(document, config)?;
            session.index().context_for(
                &request.question,
                config.retrieval.feedback_k,
                config.retrieval.feedback_context_chars,
            )
        }
        None => NO_CONTEXT_SENTINEL.to_string(),
    };

    let client = Arc::new(HttpLLMClient::new(config.llm_service.clone())?);
    let grader = AnswerGrader::new(client);
    let report = grader.grade(&request, &context).await?;

    print!("{}", format_grading_report(&report, format)?);
    Ok(())
}
