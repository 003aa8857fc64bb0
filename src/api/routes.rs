//! API route configuration.

use crate::api::handlers::{
    brief_handler, health_handler, openapi_handler, plugin_manifest_handler, summary_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET /brief`                        - Consolidated CRM briefing
/// - `GET /summarize-contact`            - LLM summary of a contact
/// - `GET /health`                       - Dependency health
/// - `GET /.well-known/ai-plugin.json`   - AI plugin manifest
/// - `GET /openapi.yaml`                 - API contract
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/brief", get(brief_handler))
        .route("/summarize-contact", get(summary_handler))
        .route("/health", get(health_handler))
        .route("/.well-known/ai-plugin.json", get(plugin_manifest_handler))
        .route("/openapi.yaml", get(openapi_handler))
}
