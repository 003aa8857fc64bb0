//! Domain layer containing the briefing data model and CRM access contract.
//!
//! Nothing here knows about HTTP or about a particular CRM vendor.
//!
//! # Architecture
//!
//! - [`entities`] - Contact, company, deal, engagement and the assembled briefing
//! - [`repositories`] - The [`repositories::CrmRepository`] trait implemented by
//!   the infrastructure layer
//!
//! # Briefing Flow
//!
//! 1. HTTP handler validates `email` and `domain`
//! 2. [`crate::application::services::BriefingService`] looks up the contact and company
//! 3. Deals and engagements associated with either are fetched concurrently
//! 4. The result is sorted and returned as an [`entities::Briefing`]

pub mod entities;
pub mod repositories;
