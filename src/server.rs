//! HTTP server initialization and runtime setup.
//!
//! Handles CRM client construction, summarizer selection, and the Axum server
//! lifecycle including graceful shutdown.

use crate::config::Config;
use crate::domain::repositories::CrmRepository;
use crate::infrastructure::crm::HubSpotRepository;
use crate::infrastructure::summarizer::{NullSummarizer, OpenAiSummarizer, Summarizer};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - HubSpot CRM client
/// - OpenAI summarizer (or NullSummarizer fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The CRM client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let crm = HubSpotRepository::new(config.hubspot_options())
        .context("Failed to initialize CRM client")?;

    if !crm.health_check().await {
        tracing::warn!("CRM health check failed at startup; serving anyway");
    }

    let summarizer: Arc<dyn Summarizer> = if let Some(options) = config.openai_options() {
        match OpenAiSummarizer::new(options) {
            Ok(openai) => Arc::new(openai),
            Err(e) => {
                tracing::warn!("Failed to initialize summarizer: {}. Summaries disabled.", e);
                Arc::new(NullSummarizer::new())
            }
        }
    } else {
        tracing::info!("Summaries disabled (NullSummarizer)");
        Arc::new(NullSummarizer::new())
    };

    let state = AppState::new(Arc::new(crm), summarizer, config.public_base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
