//! Result expansion through related-works discovery.
//!
//! A ranked result whose enrichment descriptions mention the query pulls in
//! related works, which are appended directly after it. Discovered works
//! are not checked against ids already in the output, so a work can appear
//! more than once.

use crate::config::{RelatedWorksKind, SearchConfig};
use crate::error::SearchError;
use crate::providers::CatalogClient;
use crate::source::{CatalogSource, RelatedWorks};
use crate::types::{CatalogItem, Enrichment, RankedResult};

use super::scoring::{enrichment_mentions, score};

/// Append related works after every result whose enrichment mentions `query`.
pub async fn expand<R: RelatedWorks>(
    results: Vec<RankedResult>,
    query: &str,
    related: &R,
) -> Vec<RankedResult> {
    let mut expanded = Vec::with_capacity(results.len());

    for result in results {
        if !enrichment_mentions(&result.enrichment, query) {
            expanded.push(result);
            continue;
        }

        let found = related.discover(&result.item, query).await;
        tracing::debug!(id = %result.item.id, related = found.len(), "expanded result");
        expanded.push(result);
        expanded.extend(found);
    }

    expanded
}

/// Discovers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRelatedWorks;

impl RelatedWorks for NoRelatedWorks {
    async fn discover(&self, _item: &CatalogItem, _query: &str) -> Vec<RankedResult> {
        Vec::new()
    }
}

/// Other catalog works by the triggering item's creator.
///
/// Related works carry an empty enrichment and are scored against the
/// original query. Catalog failures are logged and yield no works.
#[derive(Debug, Clone)]
pub struct SameCreatorWorks<C> {
    catalog: C,
    limit: usize,
}

impl<C: CatalogSource> SameCreatorWorks<C> {
    pub fn new(catalog: C, limit: usize) -> Self {
        Self { catalog, limit }
    }
}

impl<C: CatalogSource> RelatedWorks for SameCreatorWorks<C> {
    async fn discover(&self, item: &CatalogItem, query: &str) -> Vec<RankedResult> {
        if item.creator.trim().is_empty() || self.limit == 0 {
            return Vec::new();
        }

        let candidates = match self.catalog.fetch_candidates(&item.creator).await {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::warn!(id = %item.id, error = %err, "related works lookup failed");
                return Vec::new();
            }
        };

        candidates
            .into_iter()
            .filter(|c| c.id != item.id && c.creator == item.creator)
            .take(self.limit)
            .map(|c| {
                let enrichment = Enrichment::default();
                let relevance = score(&c, &enrichment, query);
                RankedResult {
                    item: c,
                    enrichment,
                    relevance,
                }
            })
            .collect()
    }
}

/// Related-works strategy selected by [`SearchConfig::related_works`].
#[derive(Debug, Clone)]
pub enum RelatedWorksStrategy {
    None(NoRelatedWorks),
    SameCreator(SameCreatorWorks<CatalogClient>),
}

impl RelatedWorksStrategy {
    /// Build the configured strategy.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogClient::new`] failures for catalog-backed strategies.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(match config.related_works {
            RelatedWorksKind::None => Self::None(NoRelatedWorks),
            RelatedWorksKind::SameCreator => Self::SameCreator(SameCreatorWorks::new(
                CatalogClient::new(config)?,
                config.max_related,
            )),
        })
    }
}

impl RelatedWorks for RelatedWorksStrategy {
    async fn discover(&self, item: &CatalogItem, query: &str) -> Vec<RankedResult> {
        match self {
            Self::None(strategy) => strategy.discover(item, query).await,
            Self::SameCreator(strategy) => strategy.discover(item, query).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn make_item(id: &str, creator: &str) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            titles: vec![format!("Work {id}")],
            creator: creator.into(),
            thumbnail_url: None,
            description: None,
        }
    }

    fn ranked(id: &str, descriptions: &[&str], relevance: f64) -> RankedResult {
        RankedResult {
            item: make_item(id, "Anon"),
            enrichment: Enrichment {
                artist_names: None,
                descriptions: Some(descriptions.iter().map(|d| (*d).to_owned()).collect()),
            },
            relevance,
        }
    }

    fn ids(results: &[RankedResult]) -> Vec<&str> {
        results.iter().map(|r| r.item.id.as_str()).collect()
    }

    /// Returns two fixed related works per trigger and records trigger ids.
    #[derive(Default)]
    struct FixedRelated {
        calls: Mutex<Vec<String>>,
    }

    impl RelatedWorks for FixedRelated {
        async fn discover(&self, item: &CatalogItem, _query: &str) -> Vec<RankedResult> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(item.id.clone());
            }
            vec![
                ranked(&format!("{}-r1", item.id), &[], 0.1),
                ranked(&format!("{}-r2", item.id), &[], 0.0),
            ]
        }
    }

    struct FixedCatalog(Result<Vec<CatalogItem>, ()>);

    impl CatalogSource for FixedCatalog {
        async fn fetch_candidates(&self, _term: &str) -> Result<Vec<CatalogItem>, SearchError> {
            self.0
                .clone()
                .map_err(|()| SearchError::UpstreamUnavailable("down".into()))
        }
    }

    #[tokio::test]
    async fn no_related_works_keeps_results_unchanged() {
        let results = vec![ranked("a", &["rose"], 0.7), ranked("b", &[], 0.5)];
        let expanded = expand(results.clone(), "rose", &NoRelatedWorks).await;
        assert_eq!(expanded, results);
    }

    #[tokio::test]
    async fn related_works_follow_their_trigger() {
        let related = FixedRelated::default();
        let results = vec![
            ranked("a", &["nothing here"], 0.9),
            ranked("b", &["A ROSE in bloom"], 0.7),
            ranked("c", &[], 0.5),
        ];
        let expanded = expand(results, "rose", &related).await;
        assert_eq!(ids(&expanded), ["a", "b", "b-r1", "b-r2", "c"]);
        assert_eq!(*related.calls.lock().expect("lock"), ["b"]);
    }

    #[tokio::test]
    async fn discovery_runs_once_per_trigger() {
        let related = FixedRelated::default();
        let results = vec![ranked("a", &["rose", "rose again"], 0.9)];
        let expanded = expand(results, "rose", &related).await;
        assert_eq!(expanded.len(), 3);
        assert_eq!(related.calls.lock().expect("lock").len(), 1);
    }

    #[tokio::test]
    async fn duplicates_from_discovery_are_kept() {
        struct EchoRelated;
        impl RelatedWorks for EchoRelated {
            async fn discover(&self, _item: &CatalogItem, _query: &str) -> Vec<RankedResult> {
                vec![ranked("a", &[], 0.9)]
            }
        }
        let results = vec![ranked("a", &["rose"], 0.9)];
        let expanded = expand(results, "rose", &EchoRelated).await;
        assert_eq!(ids(&expanded), ["a", "a"]);
    }

    #[tokio::test]
    async fn same_creator_skips_trigger_and_other_creators() {
        let catalog = FixedCatalog(Ok(vec![
            make_item("KMS1", "Anna Ancher"),
            make_item("KMS2", "Anna Ancher"),
            make_item("KMS3", "Michael Ancher"),
            make_item("KMS4", "Anna Ancher"),
        ]));
        let strategy = SameCreatorWorks::new(catalog, 5);
        let found = strategy
            .discover(&make_item("KMS1", "Anna Ancher"), "work kms4")
            .await;
        assert_eq!(ids(&found), ["KMS2", "KMS4"]);
        assert!(found.iter().all(|r| r.enrichment.is_empty()));
        assert!((found[1].relevance - 0.5).abs() < 1e-9);
        assert!(found[0].relevance.abs() < 1e-9);
    }

    #[tokio::test]
    async fn same_creator_respects_limit() {
        let catalog = FixedCatalog(Ok((0..10)
            .map(|i| make_item(&format!("K{i}"), "Anon"))
            .collect()));
        let strategy = SameCreatorWorks::new(catalog, 3);
        let found = strategy.discover(&make_item("X", "Anon"), "q").await;
        assert_eq!(found.len(), 3);
    }

    #[tokio::test]
    async fn same_creator_absorbs_catalog_failure() {
        let strategy = SameCreatorWorks::new(FixedCatalog(Err(())), 5);
        let found = strategy.discover(&make_item("X", "Anon"), "q").await;
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn same_creator_needs_a_creator() {
        let catalog = FixedCatalog(Ok(vec![make_item("K1", "")]));
        let strategy = SameCreatorWorks::new(catalog, 5);
        assert!(strategy.discover(&make_item("X", " "), "q").await.is_empty());
    }

    #[test]
    fn strategy_follows_config() {
        let none = RelatedWorksStrategy::from_config(&SearchConfig::default()).expect("build");
        assert!(matches!(none, RelatedWorksStrategy::None(_)));

        let config = SearchConfig {
            related_works: RelatedWorksKind::SameCreator,
            ..Default::default()
        };
        let same = RelatedWorksStrategy::from_config(&config).expect("build");
        assert!(matches!(same, RelatedWorksStrategy::SameCreator(_)));
    }
}
