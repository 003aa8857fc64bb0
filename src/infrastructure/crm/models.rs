//! HubSpot CRM v3 wire types and their mapping onto domain entities.
//!
//! HubSpot returns every property as a string (or `null`), regardless of the
//! property's declared type. Empty strings are treated as absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

use crate::domain::entities::{Company, Contact, Deal, Engagement, EngagementKind};

pub const CONTACT_PROPERTIES: &[&str] = &[
    "email",
    "firstname",
    "lastname",
    "jobtitle",
    "phone",
    "company",
    "lifecyclestage",
];

pub const COMPANY_PROPERTIES: &[&str] = &[
    "name",
    "domain",
    "website",
    "industry",
    "description",
    "city",
    "country",
    "numberofemployees",
];

pub const DEAL_PROPERTIES: &[&str] = &["dealname", "dealstage", "pipeline", "amount", "closedate"];

/// HubSpot object type and property names for one engagement kind.
pub struct EngagementSchema {
    pub object_type: &'static str,
    pub subject: Option<&'static str>,
    pub body: &'static str,
}

impl EngagementSchema {
    pub fn for_kind(kind: EngagementKind) -> Self {
        match kind {
            EngagementKind::Call => Self {
                object_type: "calls",
                subject: Some("hs_call_title"),
                body: "hs_call_body",
            },
            EngagementKind::Email => Self {
                object_type: "emails",
                subject: Some("hs_email_subject"),
                body: "hs_email_text",
            },
            EngagementKind::Meeting => Self {
                object_type: "meetings",
                subject: Some("hs_meeting_title"),
                body: "hs_meeting_body",
            },
            EngagementKind::Note => Self {
                object_type: "notes",
                subject: None,
                body: "hs_note_body",
            },
            EngagementKind::Task => Self {
                object_type: "tasks",
                subject: Some("hs_task_subject"),
                body: "hs_task_body",
            },
        }
    }

    pub fn properties(&self) -> Vec<&'static str> {
        let mut props = vec![TIMESTAMP_PROPERTY, self.body];
        props.extend(self.subject);
        props
    }
}

pub const TIMESTAMP_PROPERTY: &str = "hs_timestamp";

/// Body of `POST /crm/v3/objects/{type}/search`.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub filter_groups: Vec<FilterGroup>,
    pub properties: Vec<String>,
    pub sorts: Option<Vec<SortSpec>>,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub property_name: String,
    pub operator: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub property_name: String,
    pub direction: &'static str,
}

impl SearchRequest {
    /// Single-record lookup by an exact property value.
    pub fn exact(property: &str, value: &str, properties: &[&str]) -> Self {
        Self {
            filter_groups: vec![FilterGroup {
                filters: vec![Filter::eq(property, value)],
            }],
            properties: properties.iter().map(|p| p.to_string()).collect(),
            sorts: None,
            limit: 1,
        }
    }

    /// Records associated with the contact OR the company.
    ///
    /// HubSpot ORs filter groups and de-duplicates the results.
    pub fn associated(
        contact_id: &str,
        company_id: Option<&str>,
        properties: &[&str],
        sort_by: &str,
        limit: u32,
    ) -> Self {
        let mut filter_groups = vec![FilterGroup {
            filters: vec![Filter::eq("associations.contact", contact_id)],
        }];
        if let Some(company_id) = company_id {
            filter_groups.push(FilterGroup {
                filters: vec![Filter::eq("associations.company", company_id)],
            });
        }

        Self {
            filter_groups,
            properties: properties.iter().map(|p| p.to_string()).collect(),
            sorts: Some(vec![SortSpec {
                property_name: sort_by.to_string(),
                direction: "DESCENDING",
            }]),
            limit,
        }
    }
}

impl Filter {
    fn eq(property: &str, value: &str) -> Self {
        Self {
            property_name: property.to_string(),
            operator: "EQ",
            value: value.to_string(),
        }
    }
}

/// Response of a search request. Paging cursors are ignored.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub results: Vec<CrmObject>,
}

/// One CRM record as returned by the v3 object APIs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmObject {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, Option<String>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl CrmObject {
    /// Returns a non-empty property value.
    fn prop(&self, name: &str) -> Option<String> {
        self.properties
            .get(name)
            .and_then(|v| v.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        self.prop(name).as_deref().and_then(parse_timestamp)
    }

    pub fn into_contact(self, requested_email: &str) -> Contact {
        Contact {
            email: self
                .prop("email")
                .unwrap_or_else(|| requested_email.to_string()),
            first_name: self.prop("firstname"),
            last_name: self.prop("lastname"),
            job_title: self.prop("jobtitle"),
            phone: self.prop("phone"),
            company_name: self.prop("company"),
            lifecycle_stage: self.prop("lifecyclestage"),
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            updated_at: self.updated_at.as_deref().and_then(parse_timestamp),
            id: self.id,
        }
    }

    pub fn into_company(self) -> Company {
        Company {
            name: self.prop("name"),
            domain: self.prop("domain"),
            website: self.prop("website"),
            industry: self.prop("industry"),
            description: self.prop("description"),
            city: self.prop("city"),
            country: self.prop("country"),
            number_of_employees: self
                .prop("numberofemployees")
                .and_then(|n| n.parse().ok()),
            id: self.id,
        }
    }

    pub fn into_deal(self) -> Deal {
        Deal {
            name: self.prop("dealname"),
            stage: self.prop("dealstage"),
            pipeline: self.prop("pipeline"),
            amount: self.prop("amount"),
            close_date: self.timestamp("closedate"),
            id: self.id,
        }
    }

    pub fn into_engagement(self, kind: EngagementKind) -> Engagement {
        let schema = EngagementSchema::for_kind(kind);
        Engagement {
            kind,
            subject: schema.subject.and_then(|s| self.prop(s)),
            body: self.prop(schema.body),
            occurred_at: self.timestamp(TIMESTAMP_PROPERTY),
            id: self.id,
        }
    }
}

/// Parses HubSpot timestamps: RFC 3339 strings or epoch milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}
