//! # smk-search
//!
//! Catalog search with enrichment and relevance ranking for the SMK
//! (Statens Museum for Kunst) art collection.
//!
//! ## Design
//!
//! - One catalog query per search, with a fixed field projection
//! - Fuzzy title filtering that never filters a non-empty set down to nothing
//! - Per-candidate enrichment lookups, concurrent but order-preserving, with
//!   every failure absorbed into an empty enrichment
//! - Additive substring scoring clamped to `[0, 1]`, stable descending sort
//! - Expansion through a pluggable related-works strategy
//!
//! ## Failure model
//!
//! Only catalog failures abort a search. Enrichment and related-works
//! failures are logged at warn level and degrade that one result.

pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod providers;
pub mod source;
pub mod types;

pub use config::{RelatedWorksKind, SearchConfig};
pub use error::{Result, SearchError};
pub use orchestrator::search::{DefaultPipeline, SearchPipeline};
pub use source::{CatalogSource, EnrichmentSource, RelatedWorks};
pub use types::{CatalogItem, Enrichment, RankedResult, SearchResponse};

/// Search the SMK catalog and rank enriched results.
///
/// Builds HTTP clients from `config` on every call; long-running hosts
/// should build a [`DefaultPipeline`] once and reuse it.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid `config`, and the catalog
/// errors [`SearchError::UpstreamUnavailable`] / [`SearchError::UpstreamDataInvalid`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> smk_search::Result<()> {
/// let config = smk_search::SearchConfig::default();
/// let response = smk_search::search("landskab", &config).await?;
/// for result in &response.results {
///     println!("{} ({:.1})", result.item.id, result.relevance);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<SearchResponse> {
    DefaultPipeline::from_config(config)?.search(query).await
}
