//! Repository trait for read access to the external CRM.

use crate::domain::entities::{Company, Contact, Deal, Engagement};
use crate::error::AppError;
use async_trait::async_trait;

/// Records whose deals and engagements should be collected.
///
/// Associated records are the union of those linked to the contact and those
/// linked to the company, when one is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationScope {
    pub contact_id: String,
    pub company_id: Option<String>,
}

impl AssociationScope {
    pub fn new(contact_id: impl Into<String>, company_id: Option<String>) -> Self {
        Self {
            contact_id: contact_id.into(),
            company_id,
        }
    }

    /// Returns true if a record linked to the given ids falls in this scope.
    pub fn covers(&self, contact_ids: &[String], company_ids: &[String]) -> bool {
        contact_ids.contains(&self.contact_id)
            || self
                .company_id
                .as_ref()
                .is_some_and(|id| company_ids.contains(id))
    }
}

/// Read-only access to contacts, companies, deals and engagements.
///
/// # Implementations
///
/// - [`crate::infrastructure::crm::HubSpotRepository`] - HubSpot CRM v3 API
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// Every method returns [`AppError::Upstream`] when the CRM cannot be reached
/// or answers with an error, and [`AppError::Internal`] when the client is
/// misconfigured. Absence is never an error here; callers decide.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrmRepository: Send + Sync {
    /// Finds the contact whose email matches exactly.
    async fn find_contact_by_email(&self, email: &str) -> Result<Option<Contact>, AppError>;

    /// Finds the company whose primary domain matches exactly.
    async fn find_company_by_domain(&self, domain: &str) -> Result<Option<Company>, AppError>;

    /// Lists deals associated with the contact or company in `scope`.
    async fn find_deals(&self, scope: &AssociationScope) -> Result<Vec<Deal>, AppError>;

    /// Lists engagements of every kind associated with the contact or company in `scope`.
    async fn find_engagements(&self, scope: &AssociationScope)
    -> Result<Vec<Engagement>, AppError>;

    /// Checks whether the CRM answers authenticated requests.
    async fn health_check(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_covers_contact() {
        let scope = AssociationScope::new("c1", None);
        assert!(scope.covers(&["c1".to_string()], &[]));
        assert!(!scope.covers(&["c2".to_string()], &["co1".to_string()]));
    }

    #[test]
    fn test_scope_covers_company() {
        let scope = AssociationScope::new("c1", Some("co1".to_string()));
        assert!(scope.covers(&[], &["co1".to_string()]));
        assert!(!scope.covers(&[], &["co2".to_string()]));
    }
}
