//! CRM records as seen by this service.
//!
//! These are read-only projections of the system of record. They are
//! assembled per request and never persisted.
//!
//! # Entity Types
//!
//! - [`Contact`] - A person, keyed by email address
//! - [`Company`] - An organization, keyed by website domain
//! - [`Deal`] - A sales opportunity
//! - [`Engagement`] - A logged interaction (call, email, meeting, note, task)
//! - [`Briefing`] - The aggregate returned by `GET /brief`

pub mod briefing;
pub mod company;
pub mod contact;
pub mod deal;
pub mod engagement;

pub use briefing::Briefing;
pub use company::Company;
pub use contact::Contact;
pub use deal::Deal;
pub use engagement::{Engagement, EngagementKind};
