//! OpenAI chat completions backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::service::{Summarizer, SummarizerError, SummarizerResult};

const USER_AGENT: &str = concat!("crm-briefing/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the OpenAI API.
#[derive(Debug, Clone)]
pub struct OpenAiOptions {
    /// API origin, e.g. `https://api.openai.com`.
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

/// Summarizer that sends the prompt as a single user message.
pub struct OpenAiSummarizer {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiSummarizer {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::Request`] if the client cannot be constructed.
    pub fn new(options: OpenAiOptions) -> SummarizerResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(options.timeout)
            .build()
            .map_err(|e| SummarizerError::Request(format!("failed to build HTTP client: {e}")))?;

        info!("Summaries enabled (model {})", options.model);

        Ok(Self {
            client,
            endpoint: format!(
                "{}/v1/chat/completions",
                options.base_url.trim_end_matches('/')
            ),
            api_key: options.api_key,
            model: options.model,
        })
    }
}

/// Extracts the trimmed text of the first choice.
fn first_choice_text(response: ChatResponse) -> SummarizerResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(SummarizerError::EmptyResponse)
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, prompt: &str) -> SummarizerResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, "requesting summary");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizerError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "summary request rejected");
            return Err(SummarizerError::Request(format!("HTTP {status}")));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::Request(e.to_string()))?;

        first_choice_text(body)
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: [ChatMessage {
                role: "user",
                content: "hello",
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o-mini",
                "messages": [{ "role": "user", "content": "hello" }]
            })
        );
    }

    #[test]
    fn test_first_choice_is_trimmed() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "  Jane runs ops.\n" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        }))
        .unwrap();

        assert_eq!(first_choice_text(response).unwrap(), "Jane runs ops.");
    }

    #[test]
    fn test_missing_choices_is_empty_response() {
        let response: ChatResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(matches!(
            first_choice_text(response),
            Err(SummarizerError::EmptyResponse)
        ));

        let blank: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "content": "   " } }]
        }))
        .unwrap();
        assert!(matches!(
            first_choice_text(blank),
            Err(SummarizerError::EmptyResponse)
        ));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let summarizer = OpenAiSummarizer::new(OpenAiOptions {
            base_url: "https://api.openai.com/".to_string(),
            api_key: "sk-test".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout: Duration::from_secs(30),
        })
        .unwrap();

        assert_eq!(
            summarizer.endpoint,
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
