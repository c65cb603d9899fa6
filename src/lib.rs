//! # smk-finder
//!
//! HTTP host for the SMK catalog search pipeline in [`smk_search`]:
//! TOML configuration, the axum endpoints and process wiring.

pub mod config;
pub mod error;
pub mod server;

pub use config::FinderConfig;
pub use error::{FinderError, Result};
pub use server::FinderServer;
