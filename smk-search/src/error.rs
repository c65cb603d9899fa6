//! Error types for the smk-search crate.
//!
//! Display strings are stable and are passed verbatim to HTTP callers as
//! the failure detail, so they must never contain anything beyond the
//! provider's own error text.

/// Errors that can occur while running a catalog search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The catalog provider could not be reached, timed out, or answered
    /// with a non-success status. Fatal for the whole search.
    #[error("catalog provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The catalog provider answered, but the payload could not be decoded
    /// into catalog items. Fatal for the whole search.
    #[error("catalog provider returned invalid data: {0}")]
    UpstreamDataInvalid(String),

    /// An enrichment lookup failed. Only ever logged: the enrichment client
    /// replaces it with an empty enrichment before returning.
    #[error("enrichment unavailable: {0}")]
    EnrichmentUnavailable(String),

    /// Any other unexpected condition.
    #[error("unexpected error: {0}")]
    Internal(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for smk-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
