//! Additive relevance scoring from literal substring matches.
//!
//! Each source contributes independently, matched case-insensitively:
//!
//! | source                              | weight |
//! |-------------------------------------|--------|
//! | any title                           | 0.5    |
//! | creator                             | 0.3    |
//! | description                         | 0.2    |
//! | any enrichment description entry    | 0.2    |
//!
//! The raw sum can reach 1.2; the returned score is clamped to `[0, 1]`.
//! There is no normalisation by string length.

use crate::types::{CatalogItem, Enrichment};

/// Weight of a query hit in any title.
pub const TITLE_WEIGHT: f64 = 0.5;
/// Weight of a query hit in the creator.
pub const CREATOR_WEIGHT: f64 = 0.3;
/// Weight of a query hit in the description.
pub const DESCRIPTION_WEIGHT: f64 = 0.2;
/// Weight of a query hit in any enrichment description entry.
pub const ENRICHMENT_WEIGHT: f64 = 0.2;

/// Case-insensitive substring test. `needle` must already be lowercased.
pub(crate) fn contains_lowered(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Whether any enrichment description entry contains `query`
/// (case-insensitive).
pub fn enrichment_mentions(enrichment: &Enrichment, query: &str) -> bool {
    let needle = query.to_lowercase();
    enrichment
        .description_entries()
        .iter()
        .any(|entry| contains_lowered(entry, &needle))
}

/// Relevance of `item` and its `enrichment` to `query`, in `[0, 1]`.
pub fn score(item: &CatalogItem, enrichment: &Enrichment, query: &str) -> f64 {
    let needle = query.to_lowercase();
    let mut raw = 0.0;

    if item.titles.iter().any(|t| contains_lowered(t, &needle)) {
        raw += TITLE_WEIGHT;
    }
    if contains_lowered(&item.creator, &needle) {
        raw += CREATOR_WEIGHT;
    }
    if item
        .description
        .as_deref()
        .is_some_and(|d| contains_lowered(d, &needle))
    {
        raw += DESCRIPTION_WEIGHT;
    }
    if enrichment_mentions(enrichment, query) {
        raw += ENRICHMENT_WEIGHT;
    }

    f64::min(1.0, raw)
}
