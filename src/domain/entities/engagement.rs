//! Engagement entity representing a logged interaction.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use super::deal::newest_first;

/// Kind of recorded interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementKind {
    Call,
    Email,
    Meeting,
    Note,
    Task,
}

impl EngagementKind {
    pub const ALL: [EngagementKind; 5] = [
        EngagementKind::Call,
        EngagementKind::Email,
        EngagementKind::Meeting,
        EngagementKind::Note,
        EngagementKind::Task,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementKind::Call => "call",
            EngagementKind::Email => "email",
            EngagementKind::Meeting => "meeting",
            EngagementKind::Note => "note",
            EngagementKind::Task => "task",
        }
    }
}

impl fmt::Display for EngagementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A call, email, meeting, note or task associated with a contact or company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Engagement {
    pub id: String,
    pub kind: EngagementKind,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
}

impl Engagement {
    pub fn new(id: impl Into<String>, kind: EngagementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            subject: None,
            body: None,
            occurred_at: None,
        }
    }

    /// Briefing order: most recent first, undated last, then by kind and id.
    ///
    /// Ids are only unique per kind, so kind participates in the tie-break.
    pub fn briefing_order(a: &Engagement, b: &Engagement) -> Ordering {
        newest_first(a.occurred_at, b.occurred_at)
            .then_with(|| a.kind.cmp(&b.kind))
            .then_with(|| a.id.cmp(&b.id))
    }
}
