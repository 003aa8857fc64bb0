//! # CRM Briefing
//!
//! An HTTP service that turns a contact email and a company domain into a
//! single briefing: the contact, the company, their deals and their recent
//! engagements, read live from HubSpot.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Briefing entities and the CRM repository trait
//! - **Application Layer** ([`application`]) - Aggregation and summary services
//! - **Infrastructure Layer** ([`infrastructure`]) - HubSpot and OpenAI HTTP clients
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - `GET /brief` with concurrent CRM fan-out
//! - Optional LLM summaries at `GET /summarize-contact`
//! - AI plugin manifest and OpenAPI document
//! - Structured logging (text or JSON)
//!
//! ## Quick Start
//!
//! ```bash
//! export HUBSPOT_TOKEN="pat-na1-..."
//! export OPENAI_API_KEY="sk-..."   # Optional
//!
//! cargo run
//! curl 'http://localhost:3000/brief?email=jane@example.com&domain=example.com'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BriefingService, SummaryService};
    pub use crate::domain::entities::{
        Briefing, Company, Contact, Deal, Engagement, EngagementKind,
    };
    pub use crate::domain::repositories::{AssociationScope, CrmRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
