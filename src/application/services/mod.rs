//! Business logic services for the application layer.

pub mod briefing_service;
pub mod summary_service;

pub use briefing_service::BriefingService;
pub use summary_service::SummaryService;
