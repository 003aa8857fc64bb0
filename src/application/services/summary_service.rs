//! Sales-oriented contact summaries.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use serde_json::json;

use super::briefing_service::{BriefingService, normalize_email};
use crate::domain::entities::Briefing;
use crate::domain::entities::contact::email_domain;
use crate::error::AppError;
use crate::infrastructure::summarizer::{Summarizer, SummarizerError};

/// How many of the most recent engagements are quoted in the prompt.
const RECENT_ENGAGEMENTS: usize = 5;

/// Service producing a short natural-language summary of a briefing.
pub struct SummaryService {
    briefings: Arc<BriefingService>,
    summarizer: Arc<dyn Summarizer>,
}

impl SummaryService {
    pub fn new(briefings: Arc<BriefingService>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            briefings,
            summarizer,
        }
    }

    /// Returns true if an LLM backend is configured.
    pub fn is_enabled(&self) -> bool {
        self.summarizer.is_enabled()
    }

    /// Summarizes a contact for a sales rep.
    ///
    /// When `domain` is omitted, the company is looked up by the domain part of
    /// the contact's email address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if no summarizer is configured (checked
    /// before any CRM call).
    /// Returns [`AppError::Validation`] if no domain is given and the email has none.
    /// Propagates [`BriefingService::get_brief`] errors.
    /// Returns [`AppError::Upstream`] if the LLM request fails.
    pub async fn summarize(&self, email: &str, domain: Option<&str>) -> Result<String, AppError> {
        if !self.summarizer.is_enabled() {
            return Err(SummarizerError::Disabled.into());
        }

        let email = normalize_email(email)?;
        let domain = match domain.map(str::trim).filter(|d| !d.is_empty()) {
            Some(domain) => domain.to_string(),
            None => email_domain(&email).map(str::to_string).ok_or_else(|| {
                AppError::bad_request(
                    "Cannot infer company domain from email",
                    json!({ "email": email }),
                )
            })?,
        };

        let briefing = self.briefings.get_brief(&email, &domain).await?;
        let prompt = build_prompt(&briefing).map_err(|e| {
            AppError::internal("Failed to render prompt", json!({ "reason": e.to_string() }))
        })?;

        Ok(self.summarizer.summarize(&prompt).await?)
    }
}

fn field(value: Option<&str>) -> &str {
    value.unwrap_or("unknown")
}

/// Renders the briefing as an LLM prompt.
pub fn build_prompt(briefing: &Briefing) -> Result<String, fmt::Error> {
    let contact = &briefing.contact;
    let mut prompt = String::new();

    writeln!(
        prompt,
        "Summarize the following contact and company information for a sales rep.\n"
    )?;
    writeln!(prompt, "Contact:")?;
    writeln!(prompt, "  Name: {}", field(contact.full_name().as_deref()))?;
    writeln!(prompt, "  Email: {}", contact.email)?;
    writeln!(prompt, "  Title: {}", field(contact.job_title.as_deref()))?;
    writeln!(prompt, "  Company: {}", field(contact.company_name.as_deref()))?;
    writeln!(
        prompt,
        "  Lifecycle stage: {}",
        field(contact.lifecycle_stage.as_deref())
    )?;

    match &briefing.company {
        Some(company) => {
            writeln!(prompt, "\nCompany:")?;
            writeln!(prompt, "  Name: {}", field(company.name.as_deref()))?;
            writeln!(prompt, "  Website: {}", field(company.website.as_deref()))?;
            writeln!(prompt, "  Industry: {}", field(company.industry.as_deref()))?;
            writeln!(
                prompt,
                "  Description: {}",
                field(company.description.as_deref())
            )?;
        }
        None => writeln!(prompt, "\nCompany: no record found")?,
    }

    writeln!(prompt, "\nDeals ({}):", briefing.deals.len())?;
    for deal in &briefing.deals {
        writeln!(
            prompt,
            "  - {} (stage: {}, amount: {})",
            field(deal.name.as_deref()),
            field(deal.stage.as_deref()),
            field(deal.amount.as_deref())
        )?;
    }

    writeln!(
        prompt,
        "\nRecent engagements ({} total):",
        briefing.engagements.len()
    )?;
    for engagement in briefing.engagements.iter().take(RECENT_ENGAGEMENTS) {
        let when = engagement
            .occurred_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "undated".to_string());
        writeln!(
            prompt,
            "  - {} {}: {}",
            when,
            engagement.kind,
            field(engagement.subject.as_deref().or(engagement.body.as_deref()))
        )?;
    }

    write!(
        prompt,
        "\nInclude what the company does, what the contact's likely role is, \
         and how to best approach them."
    )?;

    Ok(prompt)
}
