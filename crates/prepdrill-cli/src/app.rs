//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prepdrill")]
#[command(
    author,
    version,
    about = "Rehearse technical interviews against a job description"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index a job description and report chunk statistics
    Ingest(IngestArgs),

    /// Rank indexed chunks against a query
    Search(SearchArgs),

    /// Generate interview questions for a role
    Questions(QuestionsArgs),

    /// Grade a candidate answer
    Feedback(FeedbackArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}

#[derive(Args)]
pub struct IngestArgs {
    /// Job description document (.pdf or plain text)
    pub document: PathBuf,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Job description document (.pdf or plain text)
    pub document: PathBuf,

    /// Search query
    pub query: Vec<String>,

    /// Maximum number of results
    #[arg(short, default_value_t = 5)]
    pub k: usize,
}

#[derive(Args)]
pub struct QuestionsArgs {
    /// Target role, e.g. "Backend Engineer"
    pub role: String,

    /// Experience level, e.g. "Senior"
    pub experience: String,

    /// Job description to ground the questions in
    #[arg(long)]
    pub jd: Option<PathBuf>,

    /// Topics to focus on
    #[arg(long, value_delimiter = ',')]
    pub topics: Vec<String>,

    /// Number of questions to generate
    #[arg(short, long, default_value_t = 5)]
    pub n_questions: usize,
}

#[derive(Args)]
pub struct FeedbackArgs {
    /// The interview question that was asked
    #[arg(long)]
    pub question: String,

    /// The candidate answer
    #[arg(long, conflicts_with = "answer_file")]
    pub answer: Option<String>,

    /// Read the candidate answer from a file
    #[arg(long)]
    pub answer_file: Option<PathBuf>,

    /// Job description to ground the grading in
    #[arg(long)]
    pub jd: Option<PathBuf>,

    /// Target role (optional context for the grader)
    #[arg(long)]
    pub role: Option<String>,

    /// Experience level (optional context for the grader)
    #[arg(long)]
    pub experience: Option<String>,
}
