//! Summarizer used when no LLM backend is configured.

use super::service::{Summarizer, SummarizerError, SummarizerResult};
use async_trait::async_trait;
use tracing::debug;

/// A summarizer that refuses every request.
///
/// Lets the service start without an `OPENAI_API_KEY`; the summary endpoint
/// then answers `503 Service Unavailable` while `/brief` keeps working.
pub struct NullSummarizer;

impl NullSummarizer {
    pub fn new() -> Self {
        debug!("Using NullSummarizer (summaries disabled)");
        Self
    }
}

impl Default for NullSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Summarizer for NullSummarizer {
    async fn summarize(&self, _prompt: &str) -> SummarizerResult<String> {
        Err(SummarizerError::Disabled)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
