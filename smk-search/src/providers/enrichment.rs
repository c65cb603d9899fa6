//! Enrichment provider client: per-object supplementary attributes.
//!
//! Every failure is absorbed here: callers always receive an
//! [`Enrichment`], empty when the lookup failed.

use serde::Deserialize;
use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::source::EnrichmentSource;
use crate::types::Enrichment;

/// Top-level enrichment response; the attributes live under `data`.
#[derive(Debug, Deserialize)]
struct EnrichmentEnvelope {
    #[serde(default)]
    data: Option<Enrichment>,
}

/// HTTP client for the per-object enrichment endpoint.
#[derive(Debug, Clone)]
pub struct EnrichmentClient {
    client: reqwest::Client,
    base: Url,
}

impl EnrichmentClient {
    /// Build a client from config.
    ///
    /// # Errors
    ///
    /// [`SearchError::Config`] for an unusable `enrichment_base_url`,
    /// [`SearchError::Internal`] if the HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(config)?,
            base: config.enrichment_base_url()?,
        })
    }

    /// URL for one object: the base with `id` appended as an encoded segment.
    fn url_for(&self, id: &str) -> Result<Url, SearchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| SearchError::Config("enrichment_base_url cannot be a base".into()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn try_fetch(&self, id: &str) -> Result<Enrichment, SearchError> {
        let url = self.url_for(id)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::EnrichmentUnavailable(http::describe(&e)))?
            .error_for_status()
            .map_err(|e| SearchError::EnrichmentUnavailable(http::describe(&e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::EnrichmentUnavailable(format!("response read failed: {e}")))?;

        parse_enrichment_response(&body)
    }
}

impl EnrichmentSource for EnrichmentClient {
    async fn fetch_enrichment(&self, id: &str) -> Enrichment {
        match self.try_fetch(id).await {
            Ok(enrichment) => enrichment,
            Err(err) => {
                tracing::warn!(id, error = %err, "enrichment lookup failed, using empty enrichment");
                Enrichment::default()
            }
        }
    }
}

/// Decode an enrichment response body. A missing or `null` `data` member
/// yields an empty enrichment.
pub(crate) fn parse_enrichment_response(body: &str) -> Result<Enrichment, SearchError> {
    let envelope: EnrichmentEnvelope = serde_json::from_str(body)
        .map_err(|e| SearchError::EnrichmentUnavailable(format!("invalid payload: {e}")))?;
    Ok(envelope.data.unwrap_or_default())
}
