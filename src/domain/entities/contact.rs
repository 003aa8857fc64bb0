//! Contact entity representing a person in the CRM.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A person record, looked up by email address.
///
/// `company_name` is the free-text company property on the contact itself and
/// is not guaranteed to match any [`super::Company`] record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub lifecycle_stage: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// Creates a contact with only the identifying fields set.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            job_title: None,
            phone: None,
            company_name: None,
            lifecycle_stage: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns "First Last", whichever parts are present, or `None`.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

}

/// Returns the domain part of an email address, if it has a non-empty one.
pub fn email_domain(email: &str) -> Option<&str> {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .filter(|d| !d.is_empty())
}
