//! DTOs for the contact summary endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of `GET /summarize-contact`.
#[derive(Debug, Deserialize, Validate)]
pub struct SummaryQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    /// Company domain; inferred from the email when absent.
    pub domain: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}
