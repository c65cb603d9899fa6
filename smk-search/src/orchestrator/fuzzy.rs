//! Fuzzy title filtering.
//!
//! Similarity is the normalised insert/delete ratio on a 0–100 scale:
//!
//! ```text
//! ratio = 100 * 2 * matched_chars / (len(query) + len(title))
//! ```
//!
//! where `matched_chars` comes from a character-level diff. Comparison is
//! case-sensitive.

use similar::TextDiff;

use crate::types::CatalogItem;

/// Default minimum ratio for an item to be kept.
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Similarity of two strings on a 0–100 scale. Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio()) * 100.0
}

/// Best ratio between `query` and any of the item's titles, with the
/// title that produced it. The first title wins ties. `None` when the
/// item has no titles.
pub fn best_title_match<'a>(item: &'a CatalogItem, query: &str) -> Option<(&'a str, f64)> {
    item.titles
        .iter()
        .map(|title| (title.as_str(), ratio(query, title)))
        .fold(None, |best, (title, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((title, score)),
        })
}

/// Keeps items whose best title ratio reaches `threshold`, in input order.
///
/// If no item qualifies, the unfiltered input is returned: a non-empty
/// input never filters down to nothing.
pub fn filter(items: Vec<CatalogItem>, query: &str, threshold: f64) -> Vec<CatalogItem> {
    let (kept, dropped): (Vec<_>, Vec<_>) = items.into_iter().partition(|item| {
        best_title_match(item, query).is_some_and(|(_, score)| score >= threshold)
    });

    if kept.is_empty() {
        tracing::debug!(
            candidates = dropped.len(),
            "no title passed fuzzy filter, keeping all candidates"
        );
        return dropped;
    }

    tracing::debug!(kept = kept.len(), dropped = dropped.len(), "fuzzy filter applied");
    kept
}
