//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{BriefingService, SummaryService};
use crate::domain::repositories::CrmRepository;
use crate::infrastructure::summarizer::Summarizer;

#[derive(Clone)]
pub struct AppState {
    pub briefing_service: Arc<BriefingService>,
    pub summary_service: Arc<SummaryService>,
    /// Externally visible origin, used to build absolute URLs in the plugin manifest.
    pub public_base_url: Arc<str>,
}

impl AppState {
    /// Wires services on top of a CRM backend and a summarizer.
    pub fn new(
        crm: Arc<dyn CrmRepository>,
        summarizer: Arc<dyn Summarizer>,
        public_base_url: impl Into<Arc<str>>,
    ) -> Self {
        let briefing_service = Arc::new(BriefingService::new(crm));
        let summary_service = Arc::new(SummaryService::new(
            briefing_service.clone(),
            summarizer,
        ));

        Self {
            briefing_service,
            summary_service,
            public_base_url: public_base_url.into(),
        }
    }
}
