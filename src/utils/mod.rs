//! Utility functions shared by handlers, services and the CLI.
//!
//! - [`domain_normalizer`] - Company domain normalization before CRM lookups

pub mod domain_normalizer;
