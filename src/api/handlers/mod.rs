//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod brief;
pub mod health;
pub mod manifest;
pub mod summary;

pub use brief::brief_handler;
pub use health::health_handler;
pub use manifest::{openapi_handler, plugin_manifest_handler};
pub use summary::summary_handler;
