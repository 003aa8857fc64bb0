//! Natural-language summaries of briefings.
//!
//! Provides a [`Summarizer`] trait with two implementations:
//! - [`OpenAiSummarizer`] - OpenAI chat completions backend
//! - [`NullSummarizer`] - Used when no API key is configured; always disabled

mod null_summarizer;
mod openai;
mod service;

pub use null_summarizer::NullSummarizer;
pub use openai::{OpenAiOptions, OpenAiSummarizer};
pub use service::{Summarizer, SummarizerError, SummarizerResult};

#[cfg(test)]
pub use service::MockSummarizer;
