//! Handlers for machine-readable service descriptions.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::api::dto::manifest::PluginManifest;
use crate::state::AppState;

/// The API contract, served verbatim.
pub const OPENAPI_DOCUMENT: &str = include_str!("../../../openapi.yaml");

/// Returns the AI plugin manifest.
///
/// # Endpoint
///
/// `GET /.well-known/ai-plugin.json`
pub async fn plugin_manifest_handler(State(state): State<AppState>) -> Json<PluginManifest> {
    Json(PluginManifest::new(&state.public_base_url))
}

/// Returns the OpenAPI document.
///
/// # Endpoint
///
/// `GET /openapi.yaml`
pub async fn openapi_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/yaml")],
        OPENAPI_DOCUMENT,
    )
}
