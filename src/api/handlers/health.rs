//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with dependency checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: CRM reachable
/// - **503 Service Unavailable**: CRM unreachable or rejecting the token
///
/// A disabled summarizer is reported but does not degrade the service.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "crm": { "status": "ok", "message": "CRM reachable" },
///     "summarizer": { "status": "disabled", "message": "OPENAI_API_KEY not set" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let crm_check = check_crm(&state).await;
    let summarizer_check = check_summarizer(&state);

    let healthy = crm_check.is_ok() && summarizer_check.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            crm: crm_check,
            summarizer: summarizer_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the CRM accepts authenticated requests.
async fn check_crm(state: &AppState) -> CheckStatus {
    if state.briefing_service.crm_healthy().await {
        CheckStatus::new("ok", "CRM reachable")
    } else {
        CheckStatus::new("error", "CRM unreachable or token rejected")
    }
}

/// Reports whether summaries are configured.
fn check_summarizer(state: &AppState) -> CheckStatus {
    if state.summary_service.is_enabled() {
        CheckStatus::new("ok", "Summaries enabled")
    } else {
        CheckStatus::new("disabled", "OPENAI_API_KEY not set")
    }
}
