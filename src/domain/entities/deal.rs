//! Deal entity representing a sales opportunity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

/// A sales opportunity associated with a contact or company.
///
/// `amount` is kept as the decimal string the CRM returns; currencies and
/// precision vary per portal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deal {
    pub id: String,
    pub name: Option<String>,
    pub stage: Option<String>,
    pub pipeline: Option<String>,
    pub amount: Option<String>,
    pub close_date: Option<DateTime<Utc>>,
}

impl Deal {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            stage: None,
            pipeline: None,
            amount: None,
            close_date: None,
        }
    }

    /// Briefing order: latest close date first, undated deals last, then by id.
    pub fn briefing_order(a: &Deal, b: &Deal) -> Ordering {
        newest_first(a.close_date, b.close_date).then_with(|| a.id.cmp(&b.id))
    }
}

/// Descending by timestamp with `None` sorted after every `Some`.
pub(crate) fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
