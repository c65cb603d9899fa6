//! Search orchestrator: normalise, fetch, filter, enrich, score, rank, expand.
//!
//! Each stage lives in its own module so it can be tested in isolation;
//! [`search::SearchPipeline`] wires them together.

pub mod expand;
pub mod fuzzy;
pub mod normalize;
pub mod scoring;
pub mod search;
