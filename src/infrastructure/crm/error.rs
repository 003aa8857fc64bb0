//! Transport-level errors raised while talking to the CRM.

use std::time::Duration;

/// Errors that can occur during CRM requests.
#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    #[error("CRM responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("CRM rate limit exceeded")]
    RateLimited { retry_after: Option<Duration> },

    #[error("CRM request timed out")]
    Timeout,

    #[error("CRM transport error: {0}")]
    Transport(String),

    #[error("Failed to decode CRM response: {0}")]
    Decode(String),

    #[error("Invalid CRM client configuration: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for CrmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CrmError::Timeout
        } else if e.is_decode() {
            CrmError::Decode(e.to_string())
        } else if e.is_builder() {
            CrmError::Configuration(e.to_string())
        } else {
            CrmError::Transport(e.to_string())
        }
    }
}

/// Result type for CRM transport operations.
pub type CrmResult<T> = Result<T, CrmError>;
