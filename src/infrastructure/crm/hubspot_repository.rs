//! HubSpot CRM v3 implementation of [`CrmRepository`].

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt, stream};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, info, instrument, warn};

use super::error::{CrmError, CrmResult};
use super::models::{
    COMPANY_PROPERTIES, CONTACT_PROPERTIES, DEAL_PROPERTIES, EngagementSchema, SearchRequest,
    SearchResponse, TIMESTAMP_PROPERTY,
};
use crate::domain::entities::{Company, Contact, Deal, Engagement, EngagementKind};
use crate::domain::repositories::{AssociationScope, CrmRepository};
use crate::error::AppError;

/// Largest page HubSpot's search endpoints accept.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Searches allowed in flight at once, across all callers.
pub const MAX_CONCURRENT_SEARCHES: usize = 2;

/// Default pace for search requests. HubSpot rejects more than about five
/// searches per second per token.
pub const DEFAULT_SEARCH_RATE: u32 = 4;

/// Wait before retrying a 429 that carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(1);

/// Longest `Retry-After` honoured before giving up.
const MAX_RETRY_AFTER: Duration = Duration::from_secs(10);

/// Longest upstream error body kept for diagnostics.
const MAX_ERROR_BODY: usize = 512;

const USER_AGENT: &str = concat!("crm-briefing/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the HubSpot API.
#[derive(Debug, Clone)]
pub struct HubSpotOptions {
    /// API origin, e.g. `https://api.hubapi.com`.
    pub base_url: String,
    /// Private app access token sent as a bearer credential.
    pub token: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum deals or engagements (per kind) fetched for one briefing.
    pub page_limit: u32,
    /// Search requests started per second, shared by all briefings.
    pub search_rate: u32,
}

/// CRM repository backed by HubSpot's search API.
///
/// Holds a single pooled [`Client`] and is shared behind an `Arc`. Every
/// search goes through one rate limiter and one semaphore, so concurrent
/// briefings together stay under the account's search limit.
pub struct HubSpotRepository {
    client: Client,
    base_url: String,
    token: String,
    page_limit: u32,
    search_pace: DefaultDirectRateLimiter,
    search_slots: Semaphore,
}

impl HubSpotRepository {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Configuration`] if the token is empty, the page limit
    /// is outside `1..=100`, the search rate is zero, or the TLS backend cannot
    /// be initialized.
    pub fn new(options: HubSpotOptions) -> CrmResult<Self> {
        if options.token.trim().is_empty() {
            return Err(CrmError::Configuration(
                "access token must not be empty".to_string(),
            ));
        }
        if !(1..=MAX_PAGE_LIMIT).contains(&options.page_limit) {
            return Err(CrmError::Configuration(format!(
                "page limit must be between 1 and {MAX_PAGE_LIMIT}, got {}",
                options.page_limit
            )));
        }
        let search_rate = NonZeroU32::new(options.search_rate).ok_or_else(|| {
            CrmError::Configuration("search rate must be at least 1 per second".to_string())
        })?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(options.timeout)
            .connect_timeout(options.timeout.min(Duration::from_secs(5)))
            .build()
            .map_err(|e| CrmError::Configuration(format!("failed to build HTTP client: {e}")))?;

        info!(
            "HubSpot client ready ({}, {} searches/s)",
            options.base_url, search_rate
        );

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            token: options.token,
            page_limit: options.page_limit,
            // No burst: consecutive searches start at least 1/rate seconds apart.
            search_pace: RateLimiter::direct(
                Quota::per_second(search_rate).allow_burst(NonZeroU32::MIN),
            ),
            search_slots: Semaphore::new(MAX_CONCURRENT_SEARCHES),
        })
    }

    fn object_url(&self, object_type: &str, suffix: &str) -> String {
        format!("{}/crm/v3/objects/{}{}", self.base_url, object_type, suffix)
    }

    /// Runs one search, retrying once after a 429.
    async fn search(&self, object_type: &str, body: &SearchRequest) -> CrmResult<SearchResponse> {
        match self.search_once(object_type, body).await {
            Err(CrmError::RateLimited { retry_after }) => {
                let wait = retry_after.unwrap_or(DEFAULT_RETRY_AFTER);
                if wait > MAX_RETRY_AFTER {
                    return Err(CrmError::RateLimited { retry_after });
                }
                warn!(
                    object_type,
                    wait_ms = wait.as_millis() as u64,
                    "CRM search rate limited, retrying once"
                );
                tokio::time::sleep(wait).await;
                self.search_once(object_type, body).await
            }
            other => other,
        }
    }

    /// Waits for a search slot and the pacer, then sends one search request.
    async fn search_once(
        &self,
        object_type: &str,
        body: &SearchRequest,
    ) -> CrmResult<SearchResponse> {
        let _slot = self
            .search_slots
            .acquire()
            .await
            .map_err(|e| CrmError::Configuration(e.to_string()))?;
        self.search_pace.until_ready().await;

        let url = self.object_url(object_type, "/search");
        debug!(%url, "CRM search");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        decode(response).await
    }

    async fn find_engagements_of_kind(
        &self,
        kind: EngagementKind,
        scope: &AssociationScope,
    ) -> CrmResult<Vec<Engagement>> {
        let schema = EngagementSchema::for_kind(kind);
        let request = SearchRequest::associated(
            &scope.contact_id,
            scope.company_id.as_deref(),
            &schema.properties(),
            TIMESTAMP_PROPERTY,
            self.page_limit,
        );

        let response = self.search(schema.object_type, &request).await?;
        Ok(response
            .results
            .into_iter()
            .map(|obj| obj.into_engagement(kind))
            .collect())
    }
}

/// Reads `Retry-After` given in seconds. HTTP-date values are ignored.
fn retry_after(response: &reqwest::Response) -> Option<Duration> {
    response
        .headers()
        .get(header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
        .map(Duration::from_secs)
}

/// Checks the status and decodes a JSON body.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> CrmResult<T> {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(CrmError::RateLimited {
            retry_after: retry_after(&response),
        });
    }
    if !status.is_success() {
        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|i| body.is_char_boundary(*i))
                .unwrap_or(0);
            body.truncate(cut);
        }
        warn!(status = status.as_u16(), "CRM request failed");
        return Err(CrmError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| CrmError::Decode(e.to_string()))
}

#[async_trait]
impl CrmRepository for HubSpotRepository {
    #[instrument(skip_all)]
    async fn find_contact_by_email(&self, email: &str) -> Result<Option<Contact>, AppError> {
        let request = SearchRequest::exact("email", email, CONTACT_PROPERTIES);
        let response = self.search("contacts", &request).await?;

        Ok(response
            .results
            .into_iter()
            .next()
            .map(|obj| obj.into_contact(email)))
    }

    #[instrument(skip(self))]
    async fn find_company_by_domain(&self, domain: &str) -> Result<Option<Company>, AppError> {
        let request = SearchRequest::exact("domain", domain, COMPANY_PROPERTIES);
        let response = self.search("companies", &request).await?;

        Ok(response
            .results
            .into_iter()
            .next()
            .map(|obj| obj.into_company()))
    }

    #[instrument(skip_all, fields(contact_id = %scope.contact_id))]
    async fn find_deals(&self, scope: &AssociationScope) -> Result<Vec<Deal>, AppError> {
        let request = SearchRequest::associated(
            &scope.contact_id,
            scope.company_id.as_deref(),
            DEAL_PROPERTIES,
            "closedate",
            self.page_limit,
        );
        let response = self.search("deals", &request).await?;

        if response.total > response.results.len() as u64 {
            debug!(
                total = response.total,
                returned = response.results.len(),
                "deal list truncated"
            );
        }

        Ok(response
            .results
            .into_iter()
            .map(|obj| obj.into_deal())
            .collect())
    }

    #[instrument(skip_all, fields(contact_id = %scope.contact_id))]
    async fn find_engagements(
        &self,
        scope: &AssociationScope,
    ) -> Result<Vec<Engagement>, AppError> {
        let per_kind: Vec<Vec<Engagement>> = stream::iter(EngagementKind::ALL)
            .map(|kind| self.find_engagements_of_kind(kind, scope))
            .buffered(MAX_CONCURRENT_SEARCHES)
            .try_collect()
            .await?;

        Ok(per_kind.into_iter().flatten().collect())
    }

    async fn health_check(&self) -> bool {
        let url = self.object_url("contacts", "?limit=1");

        match self.client.get(&url).bearer_auth(&self.token).send().await {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) => {
                warn!(status = resp.status().as_u16(), "CRM health check rejected");
                false
            }
            Err(e) => {
                warn!("CRM health check failed: {}", e);
                false
            }
        }
    }
}
