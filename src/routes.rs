//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /brief`                       - Consolidated CRM briefing
//! - `GET /summarize-contact`           - LLM summary of a contact
//! - `GET /health`                      - CRM and summarizer status
//! - `GET /.well-known/ai-plugin.json`  - AI plugin manifest
//! - `GET /openapi.yaml`                - API contract
//!
//! Unknown paths answer with the standard JSON error body.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging (path only, no query)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use axum::http::Uri;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::public_routes()
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
