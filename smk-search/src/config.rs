//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the provider endpoints, timeouts, the fuzzy
//! filter threshold, enrichment fan-out and related-works discovery. The
//! defaults point at the public SMK APIs.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SearchError;
use crate::orchestrator::fuzzy::DEFAULT_THRESHOLD;

/// Default catalog search endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://api.smk.dk/api/v1/art/search";

/// Default enrichment endpoint; the object number is appended as a path segment.
pub const DEFAULT_ENRICHMENT_BASE_URL: &str = "https://enrichment.api.smk.dk/api/enrichment/";

/// Which related-works discovery strategy the expander uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelatedWorksKind {
    /// Never discover anything.
    #[default]
    None,
    /// Other works by the triggering item's creator.
    SameCreator,
}

/// Configuration for the search pipeline.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour. Missing fields in a serialized
/// config fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Catalog search endpoint, queried with `keys` and `fields` parameters.
    pub catalog_url: String,
    /// Enrichment endpoint base. The object number is appended to it.
    pub enrichment_base_url: String,
    /// Per-request HTTP timeout in seconds, for both providers.
    pub timeout_seconds: u64,
    /// Minimum title similarity (0–100) for an item to survive the fuzzy filter.
    pub fuzzy_threshold: f64,
    /// How many candidates may have an enrichment fetch in flight at once.
    pub max_concurrent_enrichments: usize,
    /// Send the synonym expansion to the catalog instead of the raw query.
    pub expand_synonyms: bool,
    /// Related-works discovery strategy.
    pub related_works: RelatedWorksKind,
    /// Upper bound on works appended per triggering result.
    pub max_related: usize,
    /// Custom User-Agent. If `None`, `smk-search/<version>` is sent.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_owned(),
            enrichment_base_url: DEFAULT_ENRICHMENT_BASE_URL.to_owned(),
            timeout_seconds: 10,
            fuzzy_threshold: DEFAULT_THRESHOLD,
            max_concurrent_enrichments: 8,
            expand_synonyms: false,
            related_works: RelatedWorksKind::None,
            max_related: 5,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `max_concurrent_enrichments` must be greater than 0
    /// - `fuzzy_threshold` must lie within `0.0..=100.0`
    /// - both provider URLs must parse, and the enrichment URL must be able
    ///   to take path segments
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_concurrent_enrichments == 0 {
            return Err(SearchError::Config(
                "max_concurrent_enrichments must be greater than 0".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.fuzzy_threshold) {
            return Err(SearchError::Config(
                "fuzzy_threshold must be between 0 and 100".into(),
            ));
        }
        self.catalog_url()?;
        self.enrichment_base_url()?;
        Ok(())
    }

    /// Parsed catalog endpoint.
    pub fn catalog_url(&self) -> Result<Url, SearchError> {
        Url::parse(&self.catalog_url)
            .map_err(|e| SearchError::Config(format!("invalid catalog_url: {e}")))
    }

    /// Parsed enrichment base endpoint.
    pub fn enrichment_base_url(&self) -> Result<Url, SearchError> {
        let url = Url::parse(&self.enrichment_base_url)
            .map_err(|e| SearchError::Config(format!("invalid enrichment_base_url: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(SearchError::Config(
                "enrichment_base_url cannot take path segments".into(),
            ));
        }
        Ok(url)
    }
}
