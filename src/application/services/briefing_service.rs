//! Briefing aggregation service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{Briefing, Company, Contact};
use crate::domain::repositories::{AssociationScope, CrmRepository};
use crate::error::AppError;
use crate::utils::domain_normalizer::normalize_domain;

/// Service assembling a [`Briefing`] from the CRM.
///
/// Performs at most two rounds of concurrent read-only lookups:
/// 1. contact by email and company by domain
/// 2. deals and engagements associated with either
pub struct BriefingService {
    crm: Arc<dyn CrmRepository>,
}

impl BriefingService {
    /// Creates a new briefing service.
    pub fn new(crm: Arc<dyn CrmRepository>) -> Self {
        Self { crm }
    }

    /// Builds the briefing for a contact email and company domain.
    ///
    /// The email is trimmed and lowercased; the domain is normalized with
    /// [`normalize_domain`], so `https://www.Example.com/` finds `example.com`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either input is blank or the domain is malformed.
    /// Returns [`AppError::NotFound`] if no contact matches the email.
    /// Returns [`AppError::Upstream`] if the CRM fails.
    pub async fn get_brief(&self, email: &str, domain: &str) -> Result<Briefing, AppError> {
        let email = normalize_email(email)?;
        let domain = normalize_domain(domain).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "field": "domain", "value": domain }))
        })?;

        let (contact, company) = tokio::try_join!(
            self.crm.find_contact_by_email(&email),
            self.crm.find_company_by_domain(&domain)
        )?;

        let contact = contact.ok_or_else(|| {
            AppError::not_found("Contact not found", json!({ "email": email }))
        })?;

        if company.is_none() {
            debug!(%domain, "no company for domain, briefing limited to contact");
        }

        let briefing = self.assemble(contact, company).await?;

        info!(
            contact_id = %briefing.contact.id,
            company_id = briefing.company.as_ref().map(|c| c.id.as_str()),
            deals = briefing.deals.len(),
            engagements = briefing.engagements.len(),
            "briefing assembled"
        );

        Ok(briefing)
    }

    /// Fetches associated records for an already resolved contact and company.
    async fn assemble(
        &self,
        contact: Contact,
        company: Option<Company>,
    ) -> Result<Briefing, AppError> {
        let scope = AssociationScope::new(contact.id.clone(), company.as_ref().map(|c| c.id.clone()));

        let (deals, engagements) = tokio::try_join!(
            self.crm.find_deals(&scope),
            self.crm.find_engagements(&scope)
        )?;

        Ok(Briefing::new(contact, company, deals, engagements))
    }

    /// Reports whether the CRM is reachable.
    pub async fn crm_healthy(&self) -> bool {
        self.crm.health_check().await
    }
}

/// Trims and lowercases an email address; rejects blanks.
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::bad_request(
            "Email must not be empty",
            json!({ "field": "email" }),
        ));
    }
    Ok(email.to_lowercase())
}
