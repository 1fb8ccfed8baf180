use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod gemini;

pub use gemini::{GeminiConfig, GeminiService, RawResponse};

/// Text produced by a language model.
///
/// `Text` holds the generated text when the provider's response has the
/// expected shape. `Raw` holds the whole response body when it does not, so
/// a successful upstream call always yields something for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedContent {
    Text(String),
    Raw(Value),
}

impl GeneratedContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            GeneratedContent::Text(text) => Some(text),
            GeneratedContent::Raw(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("API returned error status: {status}, body: {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to send request to language model API: {0}")]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for LLMError {
    fn from(error: reqwest::Error) -> Self {
        // Request URLs carry the API key as a query parameter.
        LLMError::Transport(error.without_url())
    }
}

#[async_trait]
pub trait LLMService: Send + Sync {
    async fn execute_prompt(&self, prompt: &str) -> Result<GeneratedContent, LLMError>;
}
