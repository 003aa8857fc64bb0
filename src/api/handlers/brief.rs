//! Handler for the briefing endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::brief::BriefQuery;
use crate::domain::entities::Briefing;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a consolidated CRM briefing for a contact and company.
///
/// # Endpoint
///
/// `GET /brief?email={email}&domain={domain}`
///
/// # Query Parameters
///
/// - `email` (required): The contact's email address
/// - `domain` (required): The company's website domain; a full URL is accepted
///
/// # Response
///
/// ```json
/// {
///   "contact": { "id": "101", "email": "jane@example.com", "first_name": "Jane", ... },
///   "company": { "id": "202", "name": "Example Inc", "domain": "example.com", ... },
///   "deals": [ { "id": "301", "name": "Renewal", "stage": "contractsent", ... } ],
///   "engagements": [ { "id": "401", "kind": "call", "subject": "Kickoff", ... } ]
/// }
/// ```
///
/// `company` is `null` when the CRM has no company for the domain.
///
/// # Errors
///
/// - 400 Bad Request if `email` or `domain` is missing or blank
/// - 404 Not Found if no contact matches the email
/// - 502 Bad Gateway if the CRM fails
pub async fn brief_handler(
    State(state): State<AppState>,
    Query(query): Query<BriefQuery>,
) -> Result<Json<Briefing>, AppError> {
    query.validate()?;

    let briefing = state
        .briefing_service
        .get_brief(&query.email, &query.domain)
        .await?;

    Ok(Json(briefing))
}
