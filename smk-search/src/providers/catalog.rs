//! Catalog provider client for the SMK art search API.
//!
//! Issues a single GET per search with a fixed field projection and maps
//! the provider's field names onto [`CatalogItem`].

use serde::Deserialize;
use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::source::CatalogSource;
use crate::types::CatalogItem;

/// Fields requested from the catalog on every search.
pub const CATALOG_FIELDS: &str = "object_number,titles,creator,image_thumbnail,description";

/// Top-level catalog response. A missing or `null` `items` means no hits.
#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    #[serde(default)]
    items: Option<Vec<RawCatalogItem>>,
}

/// One item exactly as the provider names its fields.
#[derive(Debug, Deserialize)]
struct RawCatalogItem {
    object_number: String,
    #[serde(default)]
    titles: Vec<String>,
    #[serde(default)]
    creator: String,
    #[serde(default)]
    image_thumbnail: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawCatalogItem> for CatalogItem {
    type Error = SearchError;

    fn try_from(raw: RawCatalogItem) -> Result<Self, Self::Error> {
        if raw.object_number.trim().is_empty() {
            return Err(SearchError::UpstreamDataInvalid(
                "item with empty object_number".into(),
            ));
        }
        Ok(Self {
            id: raw.object_number,
            titles: raw.titles,
            creator: raw.creator,
            thumbnail_url: raw.image_thumbnail,
            description: raw.description,
        })
    }
}

/// HTTP client for the catalog search endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Build a client from config.
    ///
    /// # Errors
    ///
    /// [`SearchError::Config`] for an unparsable `catalog_url`,
    /// [`SearchError::Internal`] if the HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(config)?,
            endpoint: config.catalog_url()?,
        })
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_candidates(&self, search_term: &str) -> Result<Vec<CatalogItem>, SearchError> {
        tracing::trace!(search_term, "catalog search");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("keys", search_term), ("fields", CATALOG_FIELDS)])
            .send()
            .await
            .map_err(|e| SearchError::UpstreamUnavailable(http::describe(&e)))?
            .error_for_status()
            .map_err(|e| SearchError::UpstreamUnavailable(http::describe(&e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::UpstreamUnavailable(format!("response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "catalog response received");

        parse_catalog_response(&body)
    }
}

/// Decode a catalog response body into items, in provider order.
///
/// Extracted as a separate function for testability with fixed payloads.
pub(crate) fn parse_catalog_response(body: &str) -> Result<Vec<CatalogItem>, SearchError> {
    let envelope: CatalogEnvelope =
        serde_json::from_str(body).map_err(|e| SearchError::UpstreamDataInvalid(e.to_string()))?;

    let items = envelope
        .items
        .unwrap_or_default()
        .into_iter()
        .map(CatalogItem::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = items.len(), "catalog items parsed");
    Ok(items)
}
