//! HTTP clients for the upstream providers.

pub mod catalog;
pub mod enrichment;

pub use catalog::CatalogClient;
pub use enrichment::EnrichmentClient;
