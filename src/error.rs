use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::infrastructure::crm::CrmError;
use crate::infrastructure::summarizer::SummarizerError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload shared by every non-2xx JSON response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Upstream { message: String, details: Value },
    Unavailable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Splits the error into its HTTP status and wire payload.
    pub fn into_parts(self) -> (StatusCode, ErrorInfo) {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Upstream { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
            AppError::Unavailable { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        (
            status,
            ErrorInfo {
                code,
                message,
                details,
            },
        )
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Upstream { message, .. }
            | AppError::Unavailable { message, .. }
            | AppError::Internal { message, .. } => message,
        };
        f.write_str(message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.into_parts();

        if status.is_server_error() {
            tracing::warn!(code = error.code, message = %error.message, "request failed");
        }

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        AppError::bad_request("Validation failed", Value::Object(details))
    }
}

impl From<CrmError> for AppError {
    fn from(e: CrmError) -> Self {
        match e {
            CrmError::Status { status, body } => AppError::upstream(
                "CRM request failed",
                json!({ "status": status, "body": body }),
            ),
            CrmError::RateLimited { retry_after } => AppError::upstream(
                "CRM rate limit exceeded",
                json!({
                    "status": 429,
                    "retry_after_seconds": retry_after.map(|d| d.as_secs()),
                }),
            ),
            CrmError::Timeout => AppError::upstream("CRM request timed out", json!({})),
            CrmError::Transport(message) => {
                AppError::upstream("CRM is unreachable", json!({ "reason": message }))
            }
            CrmError::Decode(message) => AppError::upstream(
                "CRM returned an unexpected response",
                json!({ "reason": message }),
            ),
            CrmError::Configuration(message) => {
                AppError::internal("CRM client misconfigured", json!({ "reason": message }))
            }
        }
    }
}

impl From<SummarizerError> for AppError {
    fn from(e: SummarizerError) -> Self {
        match e {
            SummarizerError::Disabled => AppError::unavailable(
                "Summaries are disabled",
                json!({ "reason": "OPENAI_API_KEY is not configured" }),
            ),
            SummarizerError::Request(message) => {
                AppError::upstream("Summary request failed", json!({ "reason": message }))
            }
            SummarizerError::EmptyResponse => {
                AppError::upstream("Summary response was empty", json!({}))
            }
        }
    }
}
