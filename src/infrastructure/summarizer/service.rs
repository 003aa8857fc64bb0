//! Summarizer trait and error types.

use async_trait::async_trait;

/// Errors that can occur while producing a summary.
#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("Summaries are disabled")]
    Disabled,

    #[error("Summary request failed: {0}")]
    Request(String),

    #[error("Summary response contained no text")]
    EmptyResponse,
}

/// Result type for summarizer operations.
pub type SummarizerResult<T> = Result<T, SummarizerError>;

/// Turns a prompt describing a contact into a short piece of prose.
///
/// # Implementations
///
/// - [`crate::infrastructure::summarizer::OpenAiSummarizer`] - OpenAI chat completions
/// - [`crate::infrastructure::summarizer::NullSummarizer`] - Always [`SummarizerError::Disabled`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Returns the model's answer to `prompt`, trimmed.
    async fn summarize(&self, prompt: &str) -> SummarizerResult<String>;

    /// Returns true if this backend can produce summaries at all.
    fn is_enabled(&self) -> bool;
}
