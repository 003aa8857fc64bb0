//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain and application
//! layers on top of third-party HTTP APIs.
//!
//! # Modules
//!
//! - [`crm`] - HubSpot CRM v3 client implementing the CRM repository
//! - [`summarizer`] - LLM summary backends (OpenAI and a disabled fallback)

pub mod crm;
pub mod summarizer;
