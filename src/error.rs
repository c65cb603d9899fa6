//! Error types for the smk-finder host.

/// Top-level error type for the search service host.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// Configuration file could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// HTTP server could not bind or serve.
    #[error("server error: {0}")]
    Server(String),

    /// Search pipeline construction or execution error.
    #[error(transparent)]
    Search(#[from] smk_search::SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, FinderError>;
