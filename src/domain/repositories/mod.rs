//! Repository trait definitions for the domain layer.
//!
//! The CRM is the system of record; this service only reads from it. The
//! [`CrmRepository`] trait abstracts the vendor API so the aggregation logic
//! can be exercised against mocks and in-memory fixtures.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::crm`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod crm_repository;

pub use crm_repository::{AssociationScope, CrmRepository};

#[cfg(test)]
pub use crm_repository::MockCrmRepository;
