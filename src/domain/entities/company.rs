//! Company entity representing an organization in the CRM.

use serde::Serialize;

/// An organization record, looked up by website domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
    pub id: String,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub number_of_employees: Option<u64>,
}

impl Company {
    /// Creates a company with only the identifying fields set.
    pub fn new(id: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            domain: Some(domain.into()),
            website: None,
            industry: None,
            description: None,
            city: None,
            country: None,
            number_of_employees: None,
        }
    }
}
