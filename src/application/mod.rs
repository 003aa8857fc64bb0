//! Application layer services implementing the briefing use cases.
//!
//! Services consume the domain's repository traits and infrastructure backends
//! and provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::briefing_service::BriefingService`] - Contact/company/deal/engagement aggregation
//! - [`services::summary_service::SummaryService`] - LLM summary of a briefing

pub mod services;
