//! Query normalisation via a fixed synonym table.
//!
//! The first table key found (case-insensitively) inside the query selects
//! an `OR` expression over that key's synonyms. By default the expansion is
//! computed and logged but the raw query is what reaches the catalog;
//! [`QueryNormalizer::with_expansion`] opts into sending the expansion.

/// Canonical term → synonyms. Iteration order decides which key wins.
static SYNONYMS: &[(&str, &[&str])] = &[
    ("landskab", &["landskab", "natur", "udsigt", "panorama"]),
    ("portræt", &["portræt", "ansigt", "buste", "person"]),
    ("abstrakt", &["abstrakt", "nonfigurativ", "formløs"]),
    (
        "blomst",
        &["blomst", "plante", "flora", "rose", "tulipan", "lilje"],
    ),
];

/// Rewrites raw queries into catalog search terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryNormalizer {
    apply_expansion: bool,
}

impl QueryNormalizer {
    /// A normalizer that passes queries through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// A normalizer that substitutes the synonym expansion when one exists.
    pub fn with_expansion() -> Self {
        Self {
            apply_expansion: true,
        }
    }

    /// The catalog search term for `query`.
    pub fn normalize(&self, query: &str) -> String {
        match expand(query) {
            Some(expanded) if self.apply_expansion => expanded,
            Some(expanded) => {
                tracing::trace!(query, expanded = %expanded, "synonym expansion not applied");
                query.to_owned()
            }
            None => query.to_owned(),
        }
    }
}

/// The synonym expansion for `query`, if any table key occurs in it.
pub fn expand(query: &str) -> Option<String> {
    let lowered = query.to_lowercase();
    SYNONYMS
        .iter()
        .find(|(term, _)| lowered.contains(term))
        .map(|(_, synonyms)| synonyms.join(" OR "))
}
