//! Briefing aggregate returned by `GET /brief`.

use serde::Serialize;

use super::{Company, Contact, Deal, Engagement};

/// Everything known about a contact's relationship with a company.
///
/// `company` is `None` when the CRM has no company for the requested domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Briefing {
    pub contact: Contact,
    pub company: Option<Company>,
    pub deals: Vec<Deal>,
    pub engagements: Vec<Engagement>,
}

impl Briefing {
    /// Assembles a briefing, putting deals and engagements in briefing order.
    pub fn new(
        contact: Contact,
        company: Option<Company>,
        mut deals: Vec<Deal>,
        mut engagements: Vec<Engagement>,
    ) -> Self {
        deals.sort_by(Deal::briefing_order);
        engagements.sort_by(Engagement::briefing_order);

        Self {
            contact,
            company,
            deals,
            engagements,
        }
    }
}
