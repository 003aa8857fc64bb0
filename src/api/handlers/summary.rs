//! Handler for contact summaries.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::summary::{SummaryQuery, SummaryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Summarizes a contact and their company for a sales rep.
///
/// # Endpoint
///
/// `GET /summarize-contact?email={email}[&domain={domain}]`
///
/// # Errors
///
/// - 400 Bad Request if `email` is missing
/// - 404 Not Found if no contact matches the email
/// - 502 Bad Gateway if the CRM or the LLM fails
/// - 503 Service Unavailable if no LLM is configured
pub async fn summary_handler(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    query.validate()?;

    let summary = state
        .summary_service
        .summarize(&query.email, query.domain.as_deref())
        .await?;

    Ok(Json(SummaryResponse { summary }))
}
