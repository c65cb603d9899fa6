//! Trait definitions for the pipeline's pluggable collaborators.
//!
//! The catalog, the enrichment provider and related-works discovery are
//! seams: production code plugs in the HTTP clients from
//! [`crate::providers`], tests plug in in-memory sources.

use std::future::Future;

use crate::error::SearchError;
use crate::types::{CatalogItem, Enrichment, RankedResult};

/// A source of candidate catalog items.
///
/// All implementations must be `Send + Sync` so one pipeline can serve
/// concurrent requests.
pub trait CatalogSource: Send + Sync {
    /// Fetch every candidate the catalog returns for `search_term`.
    ///
    /// An empty result set is `Ok(vec![])`, not an error.
    ///
    /// # Errors
    ///
    /// [`SearchError::UpstreamUnavailable`] for transport or status failures,
    /// [`SearchError::UpstreamDataInvalid`] for undecodable payloads.
    fn fetch_candidates(
        &self,
        search_term: &str,
    ) -> impl Future<Output = Result<Vec<CatalogItem>, SearchError>> + Send;
}

/// A source of supplementary attributes for one catalog item.
///
/// Infallible by contract: implementations absorb their own failures and
/// return [`Enrichment::default()`], so one item's failure can never abort
/// or taint another's.
pub trait EnrichmentSource: Send + Sync {
    fn fetch_enrichment(&self, id: &str) -> impl Future<Output = Enrichment> + Send;
}

/// Related-works discovery used by the result expander.
///
/// Given the item that triggered expansion (its `id` is the lookup key)
/// and the original query, return zero or more related results. Returning
/// an empty list is always valid; failures must be absorbed.
pub trait RelatedWorks: Send + Sync {
    fn discover(
        &self,
        item: &CatalogItem,
        query: &str,
    ) -> impl Future<Output = Vec<RankedResult>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A catalog that either returns fixed items or fails.
    struct MockCatalog {
        items: Option<Vec<CatalogItem>>,
    }

    impl CatalogSource for MockCatalog {
        async fn fetch_candidates(
            &self,
            _search_term: &str,
        ) -> Result<Vec<CatalogItem>, SearchError> {
            self.items
                .clone()
                .ok_or_else(|| SearchError::UpstreamUnavailable("mock catalog down".into()))
        }
    }

    struct EmptyEnrichment;

    impl EnrichmentSource for EmptyEnrichment {
        async fn fetch_enrichment(&self, _id: &str) -> Enrichment {
            Enrichment::default()
        }
    }

    #[test]
    fn mock_sources_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockCatalog>();
        assert_send_sync::<EmptyEnrichment>();
    }

    #[tokio::test]
    async fn mock_catalog_returns_items() {
        let catalog = MockCatalog {
            items: Some(vec![CatalogItem {
                id: "KMS1".into(),
                titles: vec!["Red Rose".into()],
                creator: "Anon".into(),
                thumbnail_url: None,
                description: None,
            }]),
        };
        let items = catalog.fetch_candidates("rose").await.expect("should succeed");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "KMS1");
    }

    #[tokio::test]
    async fn mock_catalog_propagates_errors() {
        let catalog = MockCatalog { items: None };
        let err = catalog.fetch_candidates("rose").await.unwrap_err();
        assert!(err.to_string().contains("mock catalog down"));
    }

    #[tokio::test]
    async fn enrichment_source_is_infallible() {
        let enrichment = EmptyEnrichment.fetch_enrichment("KMS1").await;
        assert!(enrichment.is_empty());
    }
}
