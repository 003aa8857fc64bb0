//! DTOs for the briefing endpoint.

use serde::Deserialize;
use validator::Validate;

/// Query string of `GET /brief`.
///
/// Both fields default to empty so that a missing parameter surfaces as a
/// validation error with the standard error body instead of a bare
/// query-rejection response.
#[derive(Debug, Deserialize, Validate)]
pub struct BriefQuery {
    /// The contact's email address.
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    /// The company's website domain.
    #[serde(default)]
    #[validate(length(min = 1, message = "domain is required"))]
    pub domain: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fail_validation() {
        let query: BriefQuery = serde_json::from_str(r#"{"email": "jane@example.com"}"#).unwrap();
        let errors = query.validate().unwrap_err();

        let fields = errors.field_errors();
        assert!(fields.contains_key("domain"));
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_complete_query_is_valid() {
        let query = BriefQuery {
            email: "jane@example.com".to_string(),
            domain: "example.com".to_string(),
        };
        assert!(query.validate().is_ok());
    }
}
