//! Configuration management

use crate::error::{PrepdrillError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// LLM service configuration
    #[serde(default)]
    pub llm_service: LLMServiceConfig,

    /// Chunking policy for ingested documents
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Retrieval policy for prompt context assembly
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

/// LLM service configuration for external inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMServiceConfig {
    /// Base URL of the LLM service for chat/completions
    pub url: String,

    /// Model name for chat completions (question generation, grading)
    #[serde(default = "default_chat_model")]
    pub model: String,

    /// API key (optional, for authenticated services)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sampling temperature for completions
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum completion tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for LLMServiceConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("PREPDRILL_LLM_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            model: default_chat_model(),
            api_key: std::env::var("PREPDRILL_LLM_API_KEY").ok(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_chat_model() -> String {
    std::env::var("PREPDRILL_LLM_MODEL")
        .unwrap_or_else(|_| "meta-llama/Llama-3.1-8B-Instruct".to_string())
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout() -> u64 {
    30
}

/// Sliding-window chunking policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Window width in characters
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Characters shared between consecutive windows
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            overlap: default_overlap(),
        }
    }
}

fn default_max_chars() -> usize {
    crate::index::DEFAULT_CHUNK_MAX_CHARS
}

fn default_overlap() -> usize {
    crate::index::DEFAULT_CHUNK_OVERLAP
}

/// Retrieval policy for prompt context assembly
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Chunks retrieved when generating questions
    #[serde(default = "default_questions_k")]
    pub questions_k: usize,

    /// Context budget in characters for question prompts
    #[serde(default = "default_questions_context_chars")]
    pub questions_context_chars: usize,

    /// Chunks retrieved when grading an answer
    #[serde(default = "default_feedback_k")]
    pub feedback_k: usize,

    /// Context budget in characters for grading prompts
    #[serde(default = "default_feedback_context_chars")]
    pub feedback_context_chars: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            questions_k: default_questions_k(),
            questions_context_chars: default_questions_context_chars(),
            feedback_k: default_feedback_k(),
            feedback_context_chars: default_feedback_context_chars(),
        }
    }
}

fn default_questions_k() -> usize {
    6
}

fn default_questions_context_chars() -> usize {
    1600
}

fn default_feedback_k() -> usize {
    5
}

fn default_feedback_context_chars() -> usize {
    1200
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check cross-field invariants the chunker and index rely on
    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_chars == 0 {
            return Err(PrepdrillError::Config(
                "chunking.max_chars must be greater than zero".to_string(),
            ));
        }
        if self.chunking.overlap == 0 || self.chunking.overlap >= self.chunking.max_chars {
            return Err(PrepdrillError::Config(format!(
                "chunking.overlap must be in 1..{} (got {})",
                self.chunking.max_chars, self.chunking.overlap
            )));
        }
        if self.retrieval.questions_k == 0 || self.retrieval.feedback_k == 0 {
            return Err(PrepdrillError::Config(
                "retrieval k values must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunking.max_chars, 1000);
        assert_eq!(config.chunking.overlap, 120);
    }

    #[test]
    fn test_validate_rejects_oversized_overlap() {
        let mut config = Config::default();
        config.chunking.overlap = config.chunking.max_chars;
        assert!(matches!(
            config.validate(),
            Err(PrepdrillError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_overlap() {
        let mut config = Config::default();
        config.chunking.overlap = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let restored: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored.chunking.max_chars, config.chunking.max_chars);
        assert_eq!(restored.retrieval.questions_k, config.retrieval.questions_k);
    }
}
