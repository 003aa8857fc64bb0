#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use crm_briefing::domain::entities::{Company, Contact, Deal, Engagement, EngagementKind};
use crm_briefing::domain::repositories::{AssociationScope, CrmRepository};
use crm_briefing::error::AppError;
use crm_briefing::infrastructure::summarizer::{
    NullSummarizer, Summarizer, SummarizerError, SummarizerResult,
};
use crm_briefing::state::AppState;
use serde_json::json;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://localhost:3000";

/// A stored record together with the contacts and companies it is linked to.
#[derive(Clone)]
pub struct Linked<T> {
    pub record: T,
    pub contact_ids: Vec<String>,
    pub company_ids: Vec<String>,
}

impl<T> Linked<T> {
    pub fn to_contact(record: T, contact_id: &str) -> Self {
        Self {
            record,
            contact_ids: vec![contact_id.to_string()],
            company_ids: Vec::new(),
        }
    }

    pub fn to_company(record: T, company_id: &str) -> Self {
        Self {
            record,
            contact_ids: Vec::new(),
            company_ids: vec![company_id.to_string()],
        }
    }
}

/// In-memory CRM with exact-match lookups, counting every call.
#[derive(Default)]
pub struct InMemoryCrm {
    pub contacts: Vec<Contact>,
    pub companies: Vec<Company>,
    pub deals: Vec<Linked<Deal>>,
    pub engagements: Vec<Linked<Engagement>>,
    pub healthy: bool,
    pub calls: Mutex<Vec<String>>,
}

impl InMemoryCrm {
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl CrmRepository for InMemoryCrm {
    async fn find_contact_by_email(&self, email: &str) -> Result<Option<Contact>, AppError> {
        self.record("contact");
        Ok(self.contacts.iter().find(|c| c.email == email).cloned())
    }

    async fn find_company_by_domain(&self, domain: &str) -> Result<Option<Company>, AppError> {
        self.record("company");
        Ok(self
            .companies
            .iter()
            .find(|c| c.domain.as_deref() == Some(domain))
            .cloned())
    }

    async fn find_deals(&self, scope: &AssociationScope) -> Result<Vec<Deal>, AppError> {
        self.record("deals");
        Ok(self
            .deals
            .iter()
            .filter(|d| scope.covers(&d.contact_ids, &d.company_ids))
            .map(|d| d.record.clone())
            .collect())
    }

    async fn find_engagements(
        &self,
        scope: &AssociationScope,
    ) -> Result<Vec<Engagement>, AppError> {
        self.record("engagements");
        Ok(self
            .engagements
            .iter()
            .filter(|e| scope.covers(&e.contact_ids, &e.company_ids))
            .map(|e| e.record.clone())
            .collect())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

/// CRM that fails every lookup the way an unreachable upstream does.
pub struct FailingCrm;

#[async_trait]
impl CrmRepository for FailingCrm {
    async fn find_contact_by_email(&self, _email: &str) -> Result<Option<Contact>, AppError> {
        Err(upstream())
    }

    async fn find_company_by_domain(&self, _domain: &str) -> Result<Option<Company>, AppError> {
        Err(upstream())
    }

    async fn find_deals(&self, _scope: &AssociationScope) -> Result<Vec<Deal>, AppError> {
        Err(upstream())
    }

    async fn find_engagements(
        &self,
        _scope: &AssociationScope,
    ) -> Result<Vec<Engagement>, AppError> {
        Err(upstream())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

fn upstream() -> AppError {
    AppError::upstream("CRM request failed", json!({ "reason": "connection refused" }))
}

/// Summarizer returning a fixed answer and remembering the last prompt.
pub struct StaticSummarizer {
    pub answer: String,
    pub last_prompt: Mutex<Option<String>>,
}

impl StaticSummarizer {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            last_prompt: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Summarizer for StaticSummarizer {
    async fn summarize(&self, prompt: &str) -> SummarizerResult<String> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        if self.answer.is_empty() {
            return Err(SummarizerError::EmptyResponse);
        }
        Ok(self.answer.clone())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

/// Jane Doe at example.com: two deals and five engagements (one of each kind),
/// plus records for an unrelated contact that must never leak into her briefing.
pub fn sample_crm() -> InMemoryCrm {
    let mut jane = Contact::new("101", "jane@example.com");
    jane.first_name = Some("Jane".to_string());
    jane.last_name = Some("Doe".to_string());
    jane.job_title = Some("VP Operations".to_string());
    jane.lifecycle_stage = Some("customer".to_string());

    let mut company = Company::new("501", "example.com");
    company.name = Some("Example Inc".to_string());
    company.industry = Some("Logistics".to_string());
    company.number_of_employees = Some(250);

    let other = Contact::new("202", "bob@other.org");

    let mut renewal = Deal::new("9001");
    renewal.name = Some("Renewal 2026".to_string());
    renewal.stage = Some("contractsent".to_string());
    renewal.amount = Some("12000".to_string());
    renewal.close_date = Some(at(2026, 3, 31));

    let mut expansion = Deal::new("9002");
    expansion.name = Some("Expansion".to_string());
    expansion.stage = Some("qualifiedtobuy".to_string());
    expansion.close_date = Some(at(2026, 6, 30));

    let mut unrelated = Deal::new("9999");
    unrelated.name = Some("Other deal".to_string());

    let engagement = |id: &str, kind: EngagementKind, subject: &str, day: u32| {
        let mut e = Engagement::new(id, kind);
        e.subject = Some(subject.to_string());
        e.occurred_at = Some(at(2026, 2, day));
        e
    };

    InMemoryCrm {
        contacts: vec![jane, other],
        companies: vec![company],
        deals: vec![
            Linked::to_contact(renewal, "101"),
            Linked::to_company(expansion, "501"),
            Linked::to_contact(unrelated, "202"),
        ],
        engagements: vec![
            Linked::to_contact(engagement("e1", EngagementKind::Call, "Kickoff", 1), "101"),
            Linked::to_contact(engagement("e2", EngagementKind::Email, "Pricing", 3), "101"),
            Linked::to_company(engagement("e3", EngagementKind::Meeting, "QBR", 5), "501"),
            Linked::to_contact(engagement("e4", EngagementKind::Note, "Champion", 7), "101"),
            Linked::to_company(engagement("e5", EngagementKind::Task, "Send SOW", 9), "501"),
            Linked::to_contact(engagement("e9", EngagementKind::Call, "Bob call", 2), "202"),
        ],
        healthy: true,
        calls: Mutex::new(Vec::new()),
    }
}

pub fn create_test_state(crm: Arc<dyn CrmRepository>) -> AppState {
    AppState::new(crm, Arc::new(NullSummarizer::new()), BASE_URL)
}

pub fn create_test_state_with_summarizer(
    crm: Arc<dyn CrmRepository>,
    summarizer: Arc<dyn Summarizer>,
) -> AppState {
    AppState::new(crm, summarizer, BASE_URL)
}
