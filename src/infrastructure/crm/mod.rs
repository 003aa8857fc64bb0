//! CRM access over HTTP.
//!
//! Provides [`HubSpotRepository`], the production implementation of
//! [`crate::domain::repositories::CrmRepository`], and the [`CrmError`] type
//! its transport layer reports.

mod error;
mod hubspot_repository;
mod models;

pub use error::{CrmError, CrmResult};
pub use hubspot_repository::{
    DEFAULT_SEARCH_RATE, HubSpotOptions, HubSpotRepository, MAX_CONCURRENT_SEARCHES,
};
