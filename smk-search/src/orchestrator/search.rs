//! Core search pipeline: normalise, fetch, filter, enrich, score, rank, expand.

use futures::stream::{self, StreamExt};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::providers::{CatalogClient, EnrichmentClient};
use crate::source::{CatalogSource, EnrichmentSource, RelatedWorks};
use crate::types::{CatalogItem, RankedResult, SearchResponse};

use super::expand::{expand, RelatedWorksStrategy};
use super::fuzzy;
use super::normalize::QueryNormalizer;
use super::scoring::score;

/// The pipeline wired to the HTTP providers.
pub type DefaultPipeline = SearchPipeline<CatalogClient, EnrichmentClient, RelatedWorksStrategy>;

/// End-to-end search over a catalog, an enrichment source and a
/// related-works strategy.
///
/// Holds no per-request state, so one instance can serve concurrent
/// searches.
#[derive(Debug, Clone)]
pub struct SearchPipeline<C, E, R> {
    catalog: C,
    enrichment: E,
    related: R,
    normalizer: QueryNormalizer,
    fuzzy_threshold: f64,
    max_concurrent_enrichments: usize,
}

impl DefaultPipeline {
    /// Build the HTTP-backed pipeline from a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid, or
    /// [`SearchError::Internal`] if an HTTP client cannot be built.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(SearchPipeline::new(
            CatalogClient::new(config)?,
            EnrichmentClient::new(config)?,
            RelatedWorksStrategy::from_config(config)?,
            config,
        ))
    }
}

impl<C, E, R> SearchPipeline<C, E, R>
where
    C: CatalogSource,
    E: EnrichmentSource,
    R: RelatedWorks,
{
    /// Assemble a pipeline from its collaborators. Only the tuning fields
    /// of `config` are read here.
    pub fn new(catalog: C, enrichment: E, related: R, config: &SearchConfig) -> Self {
        let normalizer = if config.expand_synonyms {
            QueryNormalizer::with_expansion()
        } else {
            QueryNormalizer::new()
        };
        Self {
            catalog,
            enrichment,
            related,
            normalizer,
            fuzzy_threshold: config.fuzzy_threshold,
            max_concurrent_enrichments: config.max_concurrent_enrichments.max(1),
        }
    }

    /// Run one search.
    ///
    /// # Pipeline
    ///
    /// 1. Normalise the query into a catalog search term
    /// 2. Fetch candidates; an empty catalog yields an empty response
    /// 3. Fuzzy-filter titles against the original query
    /// 4. Enrich and score each survivor, with bounded concurrency and
    ///    results kept in candidate order
    /// 5. Stable sort by relevance (descending)
    /// 6. Expand with related works
    ///
    /// # Errors
    ///
    /// Only catalog failures abort a search. Enrichment failures are
    /// absorbed per candidate and never reach the caller.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        tracing::trace!(query, "search started");

        // 1. Normalise.
        let search_term = self.normalizer.normalize(query);

        // 2. Fetch candidates. Completes before any enrichment fetch starts.
        let candidates = self.catalog.fetch_candidates(&search_term).await?;
        if candidates.is_empty() {
            tracing::debug!("catalog returned no candidates");
            return Ok(SearchResponse::default());
        }
        tracing::debug!(count = candidates.len(), "catalog returned candidates");

        // 3. Fuzzy filter against the original query.
        let survivors = fuzzy::filter(candidates, query, self.fuzzy_threshold);

        // 4. Enrich and score.
        let mut ranked = self.enrich_and_score(survivors, query).await;

        // 5. Rank. `sort_by` is stable, so ties keep fetch order.
        ranked.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));

        // 6. Expand.
        let results = expand(ranked, query, &self.related).await;

        tracing::debug!(count = results.len(), "search finished");
        Ok(SearchResponse { results })
    }

    async fn enrich_and_score(&self, items: Vec<CatalogItem>, query: &str) -> Vec<RankedResult> {
        stream::iter(items)
            .map(|item| async move {
                let enrichment = self.enrichment.fetch_enrichment(&item.id).await;
                let relevance = score(&item, &enrichment, query);
                RankedResult {
                    item,
                    enrichment,
                    relevance,
                }
            })
            .buffered(self.max_concurrent_enrichments)
            .collect()
            .await
    }
}
