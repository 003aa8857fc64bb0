//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. The briefing itself is serialized straight from
//! [`crate::domain::entities::Briefing`].

pub mod brief;
pub mod health;
pub mod manifest;
pub mod summary;
