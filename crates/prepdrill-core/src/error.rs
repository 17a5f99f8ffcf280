//! Error types for prepdrill

use thiserror::Error;

/// Result type alias using PrepdrillError
pub type Result<T> = std::result::Result<T, PrepdrillError>;

/// Error type alias for convenience
pub type Error = PrepdrillError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTHING_TO_INDEX: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for prepdrill
#[derive(Debug, Error)]
pub enum PrepdrillError {
    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Build error: {0}")]
    Build(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External service error: {0}")]
    ExternalError(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl PrepdrillError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Extraction(_) | Self::Build(_) => exit_codes::NOTHING_TO_INDEX,
            Self::Config(_) | Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
